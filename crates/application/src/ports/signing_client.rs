//! Signing service client port.
//!
//! Wraps the vendor API: the wire schemas and session handling belong to
//! the vendor, this port only names the three calls the extension makes.

use async_trait::async_trait;

use subnoto_domain::{Envelope, Preferences, Workspace};

/// Errors from the remote signing service.
///
/// List calls collapse every transport and auth failure into a single
/// user-facing credentials message; the host shows it verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Workspace list call failed.
    #[error("Failed to fetch workspaces. Please check your API credentials.")]
    WorkspaceListFailed {
        /// Underlying transport/decode error, kept for logs only.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Envelope list call failed.
    #[error("Failed to fetch envelopes. Please check your API credentials.")]
    EnvelopeListFailed {
        /// Underlying transport/decode error, kept for logs only.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Document upload call failed.
    #[error("Upload failed: {message}")]
    UploadFailed {
        /// Underlying error text, surfaced to the user.
        message: String,
    },

    /// The client itself could not be constructed.
    #[error("Failed to initialize the Subnoto client: {0}")]
    ClientConstruction(String),
}

/// Payload for the vendor upload call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Target workspace identifier.
    pub workspace_uuid: String,
    /// Entire file contents, read into memory up front.
    pub file_bytes: Vec<u8>,
    /// File name of the source document.
    pub file_name: String,
    /// Title for the created envelope.
    pub envelope_title: String,
}

/// Result of the vendor upload call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadResponse {
    /// Identifier of the created envelope, if the server supplied one.
    pub envelope_uuid: Option<String>,
}

/// Client for the Subnoto signing service.
#[async_trait]
pub trait SigningClient: Send + Sync {
    /// Lists all workspaces visible to the credentials, in server order.
    ///
    /// An empty list is a success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::WorkspaceListFailed`] on any transport or auth
    /// failure.
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError>;

    /// Lists one page of envelopes, optionally filtered by workspace.
    ///
    /// `workspace_uuid` of `None` means all workspaces and the field must
    /// be omitted from the request entirely. `page` is 1-based.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EnvelopeListFailed`] on any transport or auth
    /// failure.
    async fn list_envelopes(
        &self,
        workspace_uuid: Option<&str>,
        page: u32,
    ) -> Result<Vec<Envelope>, ApiError>;

    /// Uploads a document, creating a new envelope in the workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UploadFailed`] on any transport failure.
    async fn upload_document(&self, request: UploadRequest) -> Result<UploadResponse, ApiError>;
}

/// Factory producing a fresh client per command invocation.
///
/// No caching across invocations and no retries; each command builds and
/// drops its own client, bound to the fixed API base address and the two
/// preference secrets.
pub trait SigningClientFactory: Send + Sync {
    /// The client type this factory produces.
    type Client: SigningClient;

    /// Builds a client bound to the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientConstruction`] if the underlying HTTP
    /// client cannot be built.
    fn create(&self, preferences: &Preferences) -> Result<Self::Client, ApiError>;
}
