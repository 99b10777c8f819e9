//! Application ports (traits) for external dependencies.
//!
//! Adapters in `kitgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by infrastructure
//!   - `Filesystem`: reading the service description, writing the tree
//!
//! - **Driving (Input) Ports**: the CLI calls `ScaffoldService` directly

pub mod output;

pub use output::Filesystem;
#[cfg(test)]
pub use output::MockFilesystem;
