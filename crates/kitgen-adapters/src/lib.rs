//! Infrastructure adapters for kitgen.
//!
//! This crate implements the ports defined in `kitgen_core::application::ports`.
//! All I/O lives here.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
