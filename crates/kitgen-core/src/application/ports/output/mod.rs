//! Driven (output) ports - implemented by infrastructure.

use crate::error::KitgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kitgen_adapters::filesystem::LocalFilesystem` (production)
/// - `kitgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are passed through unchanged; the service decides where the tree
/// is rooted. Failures surface as `ApplicationError::FilesystemError`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> KitgenResult<String>;

    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> KitgenResult<()>;

    /// Write content to a file, truncating any existing content.
    fn write_file(&self, path: &Path, content: &str) -> KitgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
