//! kitgen Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers of the kitgen service scaffolder: parse a
//! small service description, derive identifiers, and emit a layered go-kit
//! CRUD service as a set of mutually consistent Go files.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            kitgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   ScaffoldService: load → plan → write  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Driven: Filesystem)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     kitgen-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  ServiceConfig, DerivedNames, emitters  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kitgen_core::prelude::*;
//! # fn run(filesystem: Box<dyn Filesystem>) -> KitgenResult<()> {
//! let service = ScaffoldService::new(filesystem);
//! let report = service.generate("order.txt", ".", &GenerationOptions::default())?;
//! println!("wrote {} files under {}", report.written.len(), report.root.display());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationPlan, GenerationReport, ScaffoldService, ports::Filesystem,
    };
    pub use crate::domain::{
        Artifact, ArtifactKind, ArtifactSet, Attribute, DerivedNames, GenerationOptions,
        IdentifierPolicy, ServiceConfig,
    };
    pub use crate::error::{KitgenError, KitgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
