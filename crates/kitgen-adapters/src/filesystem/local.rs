//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use kitgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{KitgenError, KitgenResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> KitgenResult<String> {
        trace!(path = %path.display(), "read");
        // The bare io message ends up in `ConfigError::Unreadable`.
        std::fs::read_to_string(path).map_err(|e| filesystem_error(path, e.to_string()))
    }

    fn create_dir_all(&self, path: &Path) -> KitgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> KitgenResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> KitgenError {
    filesystem_error(path, format!("Failed to {operation}: {e}"))
}

fn filesystem_error(path: &Path, reason: String) -> KitgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}
