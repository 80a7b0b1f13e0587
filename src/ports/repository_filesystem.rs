//! Repository-level filesystem operations.
//!
//! All `path` arguments are relative to the repository root.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for the file I/O the generator performs inside the working repository.
///
/// Implementations must reject paths that escape the root boundary.
pub trait RepositoryFilesystem {
    /// Append UTF-8 content to a file, creating it (and parent directories) if absent.
    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Resolve a relative path to an absolute path within the repository root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
