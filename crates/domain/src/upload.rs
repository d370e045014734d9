//! Document upload validation.

use std::path::{Path, PathBuf};

use crate::error::{DomainError, DomainResult};

/// File extensions accepted for upload, lowercase.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "odt", "rtf"];

/// A validated upload request.
///
/// Construction runs the full pre-flight validation sequence; an instance
/// existing means the upload may proceed to I/O. Each check is a hard stop
/// with its own user-facing error and no network call is made before all
/// pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    file_path: PathBuf,
    title: String,
    workspace_uuid: String,
}

impl DocumentUpload {
    /// Validates the inputs of the upload form.
    ///
    /// Checks, in order: a file was selected, its extension is one of
    /// [`ACCEPTED_EXTENSIONS`] (case-insensitive), and a workspace was
    /// selected. The title defaults to the file name with its final
    /// extension stripped when none is supplied.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a [`DomainError`].
    pub fn new(
        file_path: Option<PathBuf>,
        title: Option<String>,
        workspace_uuid: Option<String>,
    ) -> DomainResult<Self> {
        let file_path = file_path.ok_or(DomainError::MissingFile)?;

        let extension = file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(DomainError::UnsupportedFileType(extension));
        }

        let workspace_uuid = workspace_uuid
            .filter(|uuid| !uuid.is_empty())
            .ok_or(DomainError::MissingWorkspace)?;

        let title = match title.filter(|t| !t.is_empty()) {
            Some(title) => title,
            None => derive_title(&file_path),
        };

        Ok(Self {
            file_path,
            title,
            workspace_uuid,
        })
    }

    /// Path of the document to upload.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Envelope title to create on the server.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Target workspace identifier.
    #[must_use]
    pub fn workspace_uuid(&self) -> &str {
        &self.workspace_uuid
    }
}

/// Derives a default envelope title: the file name with its final
/// extension stripped.
fn derive_title(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn path(p: &str) -> Option<PathBuf> {
        Some(PathBuf::from(p))
    }

    #[test]
    fn missing_file_is_first_failure() {
        let err = DocumentUpload::new(None, None, Some("ws".into())).unwrap_err();
        assert_eq!(err, DomainError::MissingFile);
    }

    #[test]
    fn rejects_unsupported_extension() {
        let err = DocumentUpload::new(path("/tmp/photo.png"), None, Some("ws".into())).unwrap_err();
        assert_eq!(err, DomainError::UnsupportedFileType("png".into()));
    }

    #[test]
    fn rejects_file_without_extension() {
        let err = DocumentUpload::new(path("/tmp/README"), None, Some("ws".into())).unwrap_err();
        assert_eq!(err, DomainError::UnsupportedFileType(String::new()));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let upload = DocumentUpload::new(path("/tmp/Contract.PDF"), None, Some("ws".into()));
        assert!(upload.is_ok());
    }

    #[test]
    fn extension_is_checked_before_workspace() {
        let err = DocumentUpload::new(path("/tmp/photo.png"), None, None).unwrap_err();
        assert_eq!(err, DomainError::UnsupportedFileType("png".into()));
    }

    #[test]
    fn missing_workspace_is_rejected() {
        let err = DocumentUpload::new(path("/tmp/a.pdf"), None, None).unwrap_err();
        assert_eq!(err, DomainError::MissingWorkspace);
    }

    #[test]
    fn empty_workspace_is_rejected() {
        let err = DocumentUpload::new(path("/tmp/a.pdf"), None, Some(String::new())).unwrap_err();
        assert_eq!(err, DomainError::MissingWorkspace);
    }

    #[test]
    fn title_defaults_to_stem_keeping_inner_dots() {
        let upload =
            DocumentUpload::new(path("/tmp/report.final.pdf"), None, Some("ws".into())).unwrap();
        assert_eq!(upload.title(), "report.final");
    }

    #[test]
    fn explicit_title_wins() {
        let upload = DocumentUpload::new(
            path("/tmp/report.pdf"),
            Some("Q3 Report".into()),
            Some("ws".into()),
        )
        .unwrap();
        assert_eq!(upload.title(), "Q3 Report");
    }

    #[test]
    fn empty_title_falls_back_to_stem() {
        let upload = DocumentUpload::new(
            path("/tmp/report.pdf"),
            Some(String::new()),
            Some("ws".into()),
        )
        .unwrap();
        assert_eq!(upload.title(), "report");
    }
}
