//! File system port.
//!
//! The upload command is the only file consumer and it reads the whole
//! document into memory, so the port stays read-only.

use std::path::{Path, PathBuf};

/// Errors from file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// The file does not exist.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Access to the file was denied.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read-only access to the local file system.
pub trait FileSystem: Send + Sync {
    /// Reads an entire file into memory.
    fn read_file(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, FileSystemError>> + Send;
}
