pub mod artifact;
pub mod artifact_path;
pub mod service_config;

pub use artifact::{Artifact, ArtifactKind, ArtifactSet};
pub use artifact_path::ArtifactPath;
pub use service_config::{Attribute, ServiceConfig};
