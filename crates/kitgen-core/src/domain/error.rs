// ============================================================================
// domain/error.rs - SERVICE DESCRIPTION ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or parsing a service description.
///
/// All errors are:
/// - Cloneable (so they can travel through the unified error type)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("cannot read service description {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    // ========================================================================
    // Syntax Errors
    // ========================================================================
    #[error("line {line_number}: expected `<name> = <type>`, found `{line}`")]
    MalformedLine { line_number: usize, line: String },

    #[error("line {line_number}: attribute `{name}` is declared more than once")]
    DuplicateAttribute { name: String, line_number: usize },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("required field missing or empty: {field}")]
    MissingField { field: &'static str },

    #[error("invalid service name `{name}`: {reason}")]
    InvalidServiceName { name: String, reason: String },

    #[error("invalid model name `{name}`: {reason}")]
    InvalidModelName { name: String, reason: String },
}

impl ConfigError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Unreadable { path, .. } => vec![
                format!("Check that '{}' exists and is readable", path.display()),
                "Pass the path of the service description as the only argument".into(),
            ],
            Self::MalformedLine { line_number, .. } => vec![
                format!("Fix line {line_number} of the service description"),
                "Attributes are written as `<FieldName> = <TypeToken>`".into(),
                "Example: `Total = float64`".into(),
            ],
            Self::DuplicateAttribute { name, .. } => vec![
                format!("Remove or rename one of the `{name}` attributes"),
                "Attribute names become struct fields and must be unique".into(),
            ],
            Self::MissingField { field } => vec![
                format!("Add a `{field} = <value>` line to the service description"),
            ],
            Self::InvalidServiceName { .. } => vec![
                "Use hyphen-separated words, e.g. `ServiceName = order-service`".into(),
                "The service name becomes a directory and module path; no slashes or dots".into(),
            ],
            Self::InvalidModelName { .. } => vec![
                "Use a PascalCase identifier, e.g. `ModelName = UserAccount`".into(),
                "Letters, digits and `_` only, starting with a letter".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Unreadable { .. } => ErrorCategory::NotFound,
            Self::MalformedLine { .. }
            | Self::DuplicateAttribute { .. }
            | Self::MissingField { .. }
            | Self::InvalidServiceName { .. }
            | Self::InvalidModelName { .. } => ErrorCategory::Validation,
        }
    }
}

/// Violations of the artifact layout invariants.
///
/// Emitters never produce these for a valid [`ServiceConfig`]; seeing one
/// means a bug in the generator, not in the input.
///
/// [`ServiceConfig`]: crate::domain::ServiceConfig
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("artifact set is empty")]
    Empty,

    #[error("duplicate artifact path: {path}")]
    DuplicatePath { path: String },

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("artifact path leaves the service directory: {path}")]
    EscapesRoot { path: String },
}

impl LayoutError {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Internal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
