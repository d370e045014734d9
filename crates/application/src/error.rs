//! Application error types

use subnoto_domain::DomainError;
use thiserror::Error;

use crate::ports::{ApiError, FileSystemError, PreferencesError};

/// Application-level errors surfaced at the command boundary.
///
/// Every variant maps to a transient host notification; none is fatal to
/// the host process and the screen stays re-triable after any of them.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A pre-flight validation failed; no network call was made.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A remote API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Host preferences were missing or unreadable.
    #[error(transparent)]
    Preferences(#[from] PreferencesError),

    /// Reading the local file failed.
    #[error("Failed to read file: {0}")]
    FileSystem(#[from] FileSystemError),

    /// The upload completed without a usable envelope identifier.
    #[error("Failed to upload document. No envelope ID returned.")]
    MissingEnvelopeId,
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
