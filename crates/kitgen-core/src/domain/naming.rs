//! Identifier derivation.
//!
//! Every emitter spells the model and service through [`DerivedNames`], so a
//! casing rule lives in exactly one place.
//!
//! ## Casing policy
//!
//! The lower-initial form lower-cases only the first character
//! (`UserAccount` → `userAccount`). It is used for repository field names,
//! JSON tags, local variables and the list route.

use crate::domain::entities::ServiceConfig;

/// Naming forms computed once from a [`ServiceConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// First character of each hyphen-delimited service segment.
    pub abbreviation: String,
    /// Model name with only its first character lower-cased.
    pub lower_initial_model: String,
    /// Model name in snake_case, used for file names.
    pub snake_model: String,
}

impl DerivedNames {
    pub fn derive(config: &ServiceConfig) -> Self {
        Self {
            abbreviation: abbreviate(config.service_name()),
            lower_initial_model: lower_initial(config.model_name()),
            snake_model: to_snake_case(config.model_name()),
        }
    }
}

/// `user-profile` → `up`. Empty segments contribute nothing.
pub fn abbreviate(service_name: &str) -> String {
    service_name
        .split('-')
        .filter_map(|segment| segment.chars().next())
        .collect()
}

/// Lower-case the first character only.
///
/// | Input         | Output        |
/// |---------------|---------------|
/// | "UserAccount" | "userAccount" |
/// | "ID"          | "iD"          |
/// | "order"       | "order"       |
pub fn lower_initial(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Convert a PascalCase name to snake_case.
///
/// An underscore goes in at every lowercase→uppercase and digit→uppercase
/// boundary, then the whole string is lower-cased. Runs of capitals stay
/// together (`HTTPServer` → `httpserver`).
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        let boundary = prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
        if boundary && c.is_uppercase() {
            out.push('_');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }

    out
}
