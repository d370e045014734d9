//! Real file system implementation.

use std::path::Path;

use tokio::fs;

use subnoto_application::ports::{FileSystem, FileSystemError};

/// Real file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for TokioFileSystem {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
        fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FileSystemError::NotFound(path.to_path_buf())
            } else if e.kind() == std::io::ErrorKind::PermissionDenied {
                FileSystemError::PermissionDenied(path.to_path_buf())
            } else {
                FileSystemError::Io(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn reads_whole_file_into_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"%PDF-1.7 content")
            .unwrap();

        let bytes = TokioFileSystem::new().read_file(&path).await.unwrap();
        assert_eq!(bytes, b"%PDF-1.7 content");
    }

    #[tokio::test]
    async fn missing_file_maps_to_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = TokioFileSystem::new()
            .read_file(&dir.path().join("absent.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, FileSystemError::NotFound(_)));
    }
}
