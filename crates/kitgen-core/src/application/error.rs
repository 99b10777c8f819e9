//! Application layer errors.
//!
//! These errors represent failures in orchestration, not in the input.
//! Input errors are `ConfigError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while reading input or materializing a plan.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An adapter's shared state was poisoned by a panicking writer.
    #[error("filesystem adapter lock poisoned")]
    LockPoisoned,

    /// The output root exists but is not a directory.
    #[error("output root {path} is not a directory")]
    OutputNotADirectory { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::LockPoisoned => vec!["This appears to be a bug in kitgen".into()],
            Self::OutputNotADirectory { path } => vec![
                format!("Remove or rename {}", path.display()),
                "Or choose another directory with --output".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::OutputNotADirectory { .. } => ErrorCategory::Io,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
