//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! "read a description, emit the artifacts, write the tree".

pub mod scaffold_service;

pub use scaffold_service::{GenerationPlan, GenerationReport, ScaffoldService};
