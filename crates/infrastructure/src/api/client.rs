//! HTTP client for the Subnoto public API, built on reqwest.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, multipart};
use serde_json::{Value, json};
use url::Url;

use subnoto_application::ports::{
    ApiError, SigningClient, UploadRequest, UploadResponse,
};
use subnoto_domain::{Envelope, Preferences, Workspace};

use super::types::{ListEnvelopesResponse, ListWorkspacesResponse, UploadDocumentResponse};

/// Fixed base address of the Subnoto API.
pub const API_BASE_URL: &str = "https://enclave.subnoto.com";

const WORKSPACE_LIST_PATH: &str = "/public/workspace/list";
const ENVELOPE_LIST_PATH: &str = "/public/envelope/list";
const ENVELOPE_UPLOAD_PATH: &str = "/public/envelope/upload";

const ACCESS_KEY_HEADER: &str = "X-Access-Key";
const SECRET_KEY_HEADER: &str = "X-Secret-Key";

/// Client for the Subnoto API, bound to one pair of credentials.
///
/// Built fresh per command invocation by
/// [`SubnotoClientFactory`](super::SubnotoClientFactory); no retries and
/// no caching. The enclave session handshake lives inside the vendor
/// service; this client only signs requests with the two key headers.
pub struct SubnotoApiClient {
    http: Client,
    base_url: Url,
    access_key: String,
    secret_key: String,
}

impl SubnotoApiClient {
    /// Creates a client against a custom base URL.
    ///
    /// Production code goes through the factory, which uses
    /// [`API_BASE_URL`]; tests point this at a local server.
    #[must_use]
    pub fn new(http: Client, base_url: Url, preferences: Preferences) -> Self {
        Self {
            http,
            base_url,
            access_key: preferences.access_key,
            secret_key: preferences.secret_key,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::ClientConstruction(format!("{e}: {path}")))
    }

    fn post(&self, url: Url) -> reqwest::RequestBuilder {
        self.http
            .post(url)
            .header(ACCESS_KEY_HEADER, &self.access_key)
            .header(SECRET_KEY_HEADER, &self.secret_key)
    }
}

/// Builds the `POST /public/envelope/list` request body.
///
/// No filter means the `workspaceUuid` field is omitted entirely; the
/// wire distinguishes "no filter" from "filter on empty string".
#[must_use]
pub fn envelope_list_body(workspace_uuid: Option<&str>, page: u32) -> Value {
    match workspace_uuid {
        Some(uuid) => json!({ "workspaceUuid": uuid, "page": page }),
        None => json!({ "page": page }),
    }
}

fn status_error(status: StatusCode) -> Box<dyn std::error::Error + Send + Sync> {
    format!("server returned HTTP {status}").into()
}

#[async_trait]
impl SigningClient for SubnotoApiClient {
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        let failed = |source: Box<dyn std::error::Error + Send + Sync>| {
            ApiError::WorkspaceListFailed {
                source: Some(source),
            }
        };

        let url = self.endpoint(WORKSPACE_LIST_PATH)?;
        let response = self
            .post(url)
            .json(&json!({}))
            .send()
            .await
            .map_err(|e| failed(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(status_error(status)));
        }

        let body: ListWorkspacesResponse =
            response.json().await.map_err(|e| failed(Box::new(e)))?;
        Ok(body.workspaces)
    }

    async fn list_envelopes(
        &self,
        workspace_uuid: Option<&str>,
        page: u32,
    ) -> Result<Vec<Envelope>, ApiError> {
        let failed = |source: Box<dyn std::error::Error + Send + Sync>| {
            ApiError::EnvelopeListFailed {
                source: Some(source),
            }
        };

        let url = self.endpoint(ENVELOPE_LIST_PATH)?;
        let response = self
            .post(url)
            .json(&envelope_list_body(workspace_uuid, page))
            .send()
            .await
            .map_err(|e| failed(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(status_error(status)));
        }

        let body: ListEnvelopesResponse =
            response.json().await.map_err(|e| failed(Box::new(e)))?;
        Ok(body.envelopes)
    }

    async fn upload_document(&self, request: UploadRequest) -> Result<UploadResponse, ApiError> {
        let failed = |message: String| ApiError::UploadFailed { message };

        let mime = mime_guess::from_path(&request.file_name).first_or_octet_stream();
        let part = multipart::Part::bytes(request.file_bytes)
            .file_name(request.file_name)
            .mime_str(mime.as_ref())
            .map_err(|e| failed(e.to_string()))?;
        let form = multipart::Form::new()
            .text("workspaceUuid", request.workspace_uuid)
            .text("envelopeTitle", request.envelope_title)
            .part("file", part);

        let url = self.endpoint(ENVELOPE_UPLOAD_PATH)?;
        let response = self
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(format!("server returned HTTP {status}")));
        }

        let body: UploadDocumentResponse = response
            .json()
            .await
            .map_err(|e| failed(e.to_string()))?;
        Ok(UploadResponse {
            envelope_uuid: body.envelope_uuid,
        })
    }
}
