//! The parsed service description.
//!
//! A description is a small line-oriented file:
//!
//! ```text
//! ServiceName = order-service
//! ModelName = Order
//! Attributes = {
//!   Id = string
//!   Total = float64
//! }
//! ```
//!
//! Parsing is pure; reading the file goes through the `Filesystem` port in
//! the application layer.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, warn};

use crate::domain::error::ConfigError;

const SERVICE_NAME_KEY: &str = "ServiceName";
const MODEL_NAME_KEY: &str = "ModelName";
const ATTRIBUTES_KEY: &str = "Attributes";

/// One `<name> = <type>` declaration.
///
/// The type token is opaque and copied verbatim into generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    type_token: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, type_token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_token: type_token.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_token(&self) -> &str {
        &self.type_token
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.type_token)
    }
}

/// Service name, model name and ordered attributes.
///
/// Built once per run and read-only afterwards. Attribute order is the
/// declaration order in the source file; every emitter iterates it as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    service_name: String,
    model_name: String,
    attributes: Vec<Attribute>,
}

impl ServiceConfig {
    /// Build a config directly, applying the same checks as [`Self::parse`].
    pub fn new(
        service_name: impl Into<String>,
        model_name: impl Into<String>,
        attributes: Vec<Attribute>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            service_name: service_name.into().trim().to_string(),
            model_name: model_name.into().trim().to_string(),
            attributes,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse the line-oriented description format.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let mut service_name = String::new();
        let mut model_name = String::new();
        let mut attributes = Vec::new();
        let mut seen = HashSet::new();

        for (index, raw) in source.lines().enumerate() {
            let line_number = index + 1;
            let line = raw.trim();

            match classify(line) {
                Line::Blank | Line::BlockOpen | Line::BlockClose => {}
                Line::ServiceName(value) => service_name = value.to_string(),
                Line::ModelName(value) => model_name = value.to_string(),
                Line::Attribute { name, type_token } => {
                    if !seen.insert(name.to_string()) {
                        return Err(ConfigError::DuplicateAttribute {
                            name: name.to_string(),
                            line_number,
                        });
                    }
                    debug!(line_number, name, type_token, "attribute");
                    attributes.push(Attribute::new(name, type_token));
                }
                Line::Malformed => {
                    return Err(ConfigError::MalformedLine {
                        line_number,
                        line: raw.to_string(),
                    });
                }
            }
        }

        let config = Self {
            service_name,
            model_name,
            attributes,
        };
        config.validate()?;

        if config.attributes.is_empty() {
            warn!(model = %config.model_name, "model declares no attributes");
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::MissingField {
                field: SERVICE_NAME_KEY,
            });
        }
        if self.model_name.is_empty() {
            return Err(ConfigError::MissingField {
                field: MODEL_NAME_KEY,
            });
        }
        if let Some(reason) = service_name_problem(&self.service_name) {
            return Err(ConfigError::InvalidServiceName {
                name: self.service_name.clone(),
                reason: reason.into(),
            });
        }
        if let Some(reason) = model_name_problem(&self.model_name) {
            return Err(ConfigError::InvalidModelName {
                name: self.model_name.clone(),
                reason: reason.into(),
            });
        }
        Ok(())
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// The service name is a directory under the output root and the Go module
/// path, so it must be a single plain path segment.
fn service_name_problem(name: &str) -> Option<&'static str> {
    if name == "." || name == ".." {
        Some("must not be `.` or `..`")
    } else if name.contains(['/', '\\', ':']) {
        Some("must not contain path separators")
    } else if name.contains(char::is_whitespace) {
        Some("must not contain whitespace")
    } else if name.split('-').all(str::is_empty) {
        Some("no words between the hyphens")
    } else {
        None
    }
}

/// The model name is a Go type name and, snake-cased, a file name.
fn model_name_problem(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    if !chars.next().is_some_and(char::is_alphabetic) {
        Some("must start with a letter")
    } else if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        Some("only letters, digits and `_` are allowed")
    } else {
        None
    }
}

/// Classification of a single trimmed line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    BlockOpen,
    BlockClose,
    ServiceName(&'a str),
    ModelName(&'a str),
    Attribute { name: &'a str, type_token: &'a str },
    Malformed,
}

fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }
    if line == "}" {
        return Line::BlockClose;
    }

    let Some((key, value)) = line.split_once('=') else {
        return Line::Malformed;
    };
    let (key, value) = (key.trim(), value.trim());

    match key {
        SERVICE_NAME_KEY => Line::ServiceName(value),
        MODEL_NAME_KEY => Line::ModelName(value),
        ATTRIBUTES_KEY if value == "{" => Line::BlockOpen,
        _ if key.is_empty() || value.is_empty() => Line::Malformed,
        _ => Line::Attribute {
            name: key,
            type_token: value,
        },
    }
}
