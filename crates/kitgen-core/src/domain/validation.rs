use crate::domain::{
    entities::{ArtifactSet, ServiceConfig},
    error::{ConfigError, LayoutError},
};

/// Centralized domain validation.
///
/// Entities validate themselves; this is the single entry point the
/// application layer calls before planning and before writing.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_config(config: &ServiceConfig) -> Result<(), ConfigError> {
        config.validate()
    }

    pub fn validate_artifacts(artifacts: &ArtifactSet) -> Result<(), LayoutError> {
        artifacts.validate()
    }
}
