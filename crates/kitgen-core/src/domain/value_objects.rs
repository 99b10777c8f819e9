//! Generation options.
//!
//! Small, copyable knobs that change what the emitters produce without
//! touching the service description itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Attribute;

/// Whether the identifier attribute appears in Create/Update shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierPolicy {
    /// Params and requests mirror every attribute.
    #[default]
    Include,
    /// The identifier attribute is left out of Create/Update params and
    /// requests. Entity and view keep it.
    Exclude,
}

impl IdentifierPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Exclude => "exclude",
        }
    }
}

impl fmt::Display for IdentifierPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_IDENTIFIER_FIELD: &str = "Id";
pub const DEFAULT_LISTEN_PORT: u16 = 8080;

/// Options threaded through every emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub identifier_policy: IdentifierPolicy,
    pub identifier_field: String,
    pub listen_port: u16,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            identifier_policy: IdentifierPolicy::default(),
            identifier_field: DEFAULT_IDENTIFIER_FIELD.to_string(),
            listen_port: DEFAULT_LISTEN_PORT,
        }
    }
}

impl GenerationOptions {
    pub fn with_identifier_policy(mut self, policy: IdentifierPolicy) -> Self {
        self.identifier_policy = policy;
        self
    }

    pub fn with_identifier_field(mut self, field: impl Into<String>) -> Self {
        self.identifier_field = field.into();
        self
    }

    pub fn with_listen_port(mut self, port: u16) -> Self {
        self.listen_port = port;
        self
    }

    /// Case-insensitive match against the configured identifier field.
    pub fn is_identifier(&self, attribute: &Attribute) -> bool {
        attribute
            .name()
            .eq_ignore_ascii_case(&self.identifier_field)
    }

    /// Attributes that belong in Create/Update params and requests.
    pub fn write_attributes<'a>(
        &'a self,
        attributes: &'a [Attribute],
    ) -> impl Iterator<Item = &'a Attribute> + 'a {
        attributes.iter().filter(move |a| match self.identifier_policy {
            IdentifierPolicy::Include => true,
            IdentifierPolicy::Exclude => !self.is_identifier(a),
        })
    }
}
