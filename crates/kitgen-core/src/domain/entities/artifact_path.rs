use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::LayoutError;

/// Location of an artifact below the service root.
///
/// Construction is infallible; [`ArtifactPath::check`] enforces that the
/// path stays inside the root and runs as part of artifact-set validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactPath(PathBuf);

impl ArtifactPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Reject absolute paths, `..` segments and the empty path.
    pub fn check(&self) -> Result<(), LayoutError> {
        let display = || self.0.display().to_string();

        if self.0.as_os_str().is_empty() {
            return Err(LayoutError::EscapesRoot { path: display() });
        }
        for component in self.0.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir => {
                    return Err(LayoutError::EscapesRoot { path: display() });
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(LayoutError::AbsolutePathNotAllowed { path: display() });
                }
            }
        }
        Ok(())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for ArtifactPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for ArtifactPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ArtifactPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for ArtifactPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
