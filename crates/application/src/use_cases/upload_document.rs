//! Upload document use case.

use std::path::PathBuf;

use url::Url;

use subnoto_domain::{DocumentUpload, Preferences, envelope_edit_url};

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{FileSystem, SigningClient, SigningClientFactory, UploadRequest, UrlOpener};

/// Raw values from the upload form, before validation.
#[derive(Debug, Clone, Default)]
pub struct UploadDocumentInput {
    /// Selected file, if any.
    pub file_path: Option<PathBuf>,
    /// Title override; empty or absent means "derive from file name".
    pub title: Option<String>,
    /// Selected workspace, if any.
    pub workspace_uuid: Option<String>,
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDocumentOutput {
    /// Identifier of the created envelope.
    pub envelope_uuid: String,
    /// Edit page that was handed to the browser.
    pub edit_url: Url,
}

/// Use case for uploading a document and opening its edit page.
///
/// Validation happens entirely in the domain before any port is touched;
/// a failing check means no file read and no network call.
pub struct UploadDocument<F, FS, O>
where
    F: SigningClientFactory,
    FS: FileSystem,
    O: UrlOpener,
{
    factory: F,
    file_system: FS,
    opener: O,
}

impl<F, FS, O> UploadDocument<F, FS, O>
where
    F: SigningClientFactory,
    FS: FileSystem,
    O: UrlOpener,
{
    /// Creates a new `UploadDocument` use case.
    #[must_use]
    pub const fn new(factory: F, file_system: FS, opener: O) -> Self {
        Self {
            factory,
            file_system,
            opener,
        }
    }

    /// Validates the form, uploads the document, and opens the edit page.
    ///
    /// The browser launch is fire-and-forget: a failure there is logged
    /// and the upload still counts as a success.
    ///
    /// # Errors
    ///
    /// Returns a [`subnoto_domain::DomainError`] for pre-flight validation
    /// failures, a file system error if the document cannot be read, an
    /// upload error on transport failure, and
    /// [`ApplicationError::MissingEnvelopeId`] when the server reports
    /// success without an envelope identifier.
    pub async fn execute(
        &self,
        preferences: &Preferences,
        input: UploadDocumentInput,
    ) -> ApplicationResult<UploadDocumentOutput> {
        let upload = DocumentUpload::new(input.file_path, input.title, input.workspace_uuid)?;

        let file_bytes = self.file_system.read_file(upload.file_path()).await?;
        let file_name = upload
            .file_path()
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("document")
            .to_string();

        let client = self.factory.create(preferences)?;
        let response = client
            .upload_document(UploadRequest {
                workspace_uuid: upload.workspace_uuid().to_string(),
                file_bytes,
                file_name,
                envelope_title: upload.title().to_string(),
            })
            .await?;

        // HTTP success without an envelope id is still a failure.
        let envelope_uuid = response
            .envelope_uuid
            .filter(|uuid| !uuid.is_empty())
            .ok_or(ApplicationError::MissingEnvelopeId)?;

        let edit_url = envelope_edit_url(upload.workspace_uuid(), &envelope_uuid)?;
        tracing::info!(%edit_url, "document uploaded, opening edit page");

        if let Err(e) = self.opener.open(&edit_url) {
            tracing::warn!(error = %e, "could not open browser");
        }

        Ok(UploadDocumentOutput {
            envelope_uuid,
            edit_url,
        })
    }
}
