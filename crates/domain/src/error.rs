//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No file was selected for upload.
    #[error("No file selected. Please select a PDF or Word document to upload.")]
    MissingFile,

    /// The selected file has an unsupported extension.
    #[error(
        "Invalid file type: {0}. Please select a PDF or Word document (.pdf, .doc, .docx, .odt, .rtf)."
    )]
    UnsupportedFileType(String),

    /// No workspace was selected for upload.
    #[error("No workspace selected. Please select a workspace to upload to.")]
    MissingWorkspace,

    /// An identifier is invalid or empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A deep-link URL could not be constructed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
