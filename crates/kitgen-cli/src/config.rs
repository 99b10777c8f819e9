//! Application settings.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns settings; the core crate only sees the resulting
//! [`GenerationOptions`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (merged in [`AppConfig::generation_options`])
//! 2. Settings file, only when `--settings <FILE>` is given (must exist)
//! 3. Built-in defaults
//!
//! No settings are picked up implicitly; without `--settings` the run
//! depends on the command line alone.
//!
//! ```toml
//! [generation]
//! output_dir = "services"
//! identifier_policy = "exclude"
//! identifier_field = "Id"
//! listen_port = 9090
//!
//! [output]
//! no_color = true
//! ```

use std::path::{Path, PathBuf};

use kitgen_core::domain::{GenerationOptions, IdentifierPolicy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    cli::GenerateArgs,
    error::{CliError, CliResult},
};

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Defaults for generation flags.
    pub generation: GenerationSettings,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationSettings {
    pub output_dir: Option<PathBuf>,
    pub identifier_policy: Option<IdentifierPolicy>,
    pub identifier_field: Option<String>,
    pub listen_port: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load settings from the `--settings` path, or defaults without one.
    pub fn load(settings_file: Option<&PathBuf>) -> CliResult<Self> {
        match settings_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Read and parse one TOML settings file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            message: format!("cannot read settings file {}", path.display()),
            source: Some(Box::new(e)),
        })?;
        let config = Self::parse(&raw).map_err(|e| match e {
            CliError::ConfigError { message, source } => CliError::ConfigError {
                message: format!("{}: {message}", path.display()),
                source,
            },
            other => other,
        })?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(config)
    }

    /// Parse settings from TOML text.
    pub fn parse(raw: &str) -> CliResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| CliError::ConfigError {
            message: "invalid settings".into(),
            source: Some(Box::new(e)),
        })?;

        if config.generation.listen_port == Some(0) {
            return Err(CliError::ConfigError {
                message: "generation.listen_port must be between 1 and 65535".into(),
                source: None,
            });
        }
        if config
            .generation
            .identifier_field
            .as_deref()
            .is_some_and(|f| f.trim().is_empty())
        {
            return Err(CliError::ConfigError {
                message: "generation.identifier_field must not be empty".into(),
                source: None,
            });
        }
        Ok(config)
    }

    /// Directory in which `<service-name>/` is created.
    pub fn output_root(&self, args: &GenerateArgs) -> PathBuf {
        args.output
            .clone()
            .or_else(|| self.generation.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Merge flags over settings over defaults.
    pub fn generation_options(&self, args: &GenerateArgs) -> GenerationOptions {
        let settings = &self.generation;
        let mut options = GenerationOptions::default();

        if let Some(policy) = args
            .id_policy
            .map(IdentifierPolicy::from)
            .or(settings.identifier_policy)
        {
            options = options.with_identifier_policy(policy);
        }
        if let Some(field) = args
            .id_field
            .clone()
            .or_else(|| settings.identifier_field.clone())
        {
            options = options.with_identifier_field(field);
        }
        if let Some(port) = args.port.or(settings.listen_port) {
            options = options.with_listen_port(port);
        }
        options
    }
}
