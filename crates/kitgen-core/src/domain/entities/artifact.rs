use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::domain::{entities::ArtifactPath, error::LayoutError};

/// The architectural layer an artifact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Entity,
    DomainContract,
    ServiceImpl,
    Decoder,
    Encoder,
    View,
    Endpoint,
    RepoContract,
    RepoConnection,
    RepoImpl,
    Entrypoint,
}

impl ArtifactKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::DomainContract => "domain-contract",
            Self::ServiceImpl => "service-impl",
            Self::Decoder => "decoder",
            Self::Encoder => "encoder",
            Self::View => "view",
            Self::Endpoint => "endpoint",
            Self::RepoContract => "repo-contract",
            Self::RepoConnection => "repo-connection",
            Self::RepoImpl => "repo-impl",
            Self::Entrypoint => "entrypoint",
        }
    }

    /// Placeholder layers the generator deliberately leaves unimplemented.
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Self::RepoConnection | Self::RepoImpl)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated file: its layer, its path under the service root, and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: ArtifactPath,
    pub content: String,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, path: impl Into<ArtifactPath>, content: String) -> Self {
        Self {
            kind,
            path: path.into(),
            content,
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Every artifact of one run, in write order, rooted at the service directory.
///
/// It contains no business logic, only data.
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    pub(crate) artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    pub fn with(mut self, artifact: Artifact) -> Self {
        self.push(artifact);
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.artifacts.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut seen = HashSet::new();
        for artifact in &self.artifacts {
            artifact.path.check()?;
            let path = artifact.path.as_path();
            if !seen.insert(path) {
                return Err(LayoutError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    pub fn get(&self, kind: ArtifactKind) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    pub fn find(&self, path: impl AsRef<Path>) -> Option<&Artifact> {
        let path = path.as_ref();
        self.artifacts.iter().find(|a| a.path.as_path() == path)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}
