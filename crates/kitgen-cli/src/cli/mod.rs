//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No generation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use kitgen_core::domain::IdentifierPolicy;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kitgen",
    bin_name = "kitgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a layered go-kit CRUD service from a service description",
    long_about = "kitgen reads a small service description (service name, model \
                  name, typed attributes) and writes a go-kit service in Go: entity, domain \
                  contract, service, endpoints, repository contract and stub, and \
                  an HTTP entry point.",
    after_help = "EXAMPLES:\n\
        \x20 kitgen order.txt\n\
        \x20 kitgen order.txt -o ./services --port 9090\n\
        \x20 kitgen order.txt --id-policy exclude --dry-run",
    arg_required_else_help = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

// ── generation ────────────────────────────────────────────────────────────────

/// Arguments that shape what gets generated and where.
///
/// Every option is `Option` so the settings file can fill what the command
/// line leaves out.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Service description file.
    #[arg(value_name = "INPUT", help = "Path to the service description")]
    pub input: PathBuf,

    /// Directory in which `<service-name>/` is created.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// List the artifacts without writing anything.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    /// Whether the identifier attribute appears in Create/Update shapes.
    #[arg(
        long = "id-policy",
        value_name = "POLICY",
        value_enum,
        help = "Identifier in create/update params: include (default) or exclude"
    )]
    pub id_policy: Option<IdPolicy>,

    /// Name of the identifier attribute.
    #[arg(
        long = "id-field",
        value_name = "NAME",
        help = "Identifier attribute name (default: Id)"
    )]
    pub id_field: Option<String>,

    /// Port the generated service listens on.
    #[arg(
        long = "port",
        value_name = "PORT",
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Listen port of the generated service (default: 8080)"
    )]
    pub port: Option<u16>,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Identifier policy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum IdPolicy {
    Include,
    Exclude,
}

impl From<IdPolicy> for IdentifierPolicy {
    fn from(policy: IdPolicy) -> Self {
        match policy {
            IdPolicy::Include => IdentifierPolicy::Include,
            IdPolicy::Exclude => IdentifierPolicy::Exclude,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
