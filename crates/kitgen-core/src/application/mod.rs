//! Application layer for kitgen.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`ScaffoldService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation logic itself. Parsing and emission live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerationPlan, GenerationReport, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
