//! Unified error handling for kitgen core.
//!
//! Wraps domain and application errors behind one type with
//! user-actionable suggestions and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{ConfigError, LayoutError};

/// Root error type for kitgen core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KitgenError {
    /// The service description could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Emitters produced an inconsistent artifact set (a bug).
    #[error("invalid artifact layout: {0}")]
    Layout(#[from] LayoutError),

    /// Errors from the application layer (I/O, adapter state).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl KitgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Layout(_) => {
                vec!["This appears to be a bug in kitgen".into()]
            }
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Layout(_) => ErrorCategory::Internal,
            Self::Application(e) => e.category(),
        }
    }

    /// Whether the failure lies in the user's input rather than the system.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type KitgenResult<T> = Result<T, KitgenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn config_errors_are_input_errors() {
        let err: KitgenError = ConfigError::MissingField { field: "ModelName" }.into();
        assert!(err.is_input_error());
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.to_string(), "required field missing or empty: ModelName");
    }

    #[test]
    fn unreadable_input_is_not_found() {
        let err: KitgenError = ConfigError::Unreadable {
            path: PathBuf::from("missing.txt"),
            reason: "No such file or directory".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions()[0].contains("missing.txt"));
    }

    #[test]
    fn filesystem_errors_are_io() {
        let err: KitgenError = ApplicationError::FilesystemError {
            path: PathBuf::from("out/main.go"),
            reason: "permission denied".into(),
        }
        .into();
        assert!(!err.is_input_error());
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.to_string().contains("out/main.go"));
    }

    #[test]
    fn layout_errors_are_internal() {
        let err: KitgenError = LayoutError::Empty.into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.to_string(), "invalid artifact layout: artifact set is empty");
    }
}
