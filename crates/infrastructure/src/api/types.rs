//! Wire DTOs for the Subnoto public API.
//!
//! The schemas belong to the vendor; only the fields this extension reads
//! are modeled, and missing collections decode as empty rather than
//! failing the call.

use serde::Deserialize;

use subnoto_domain::{Envelope, Workspace};

/// Response body of `POST /public/workspace/list`.
#[derive(Debug, Deserialize)]
pub struct ListWorkspacesResponse {
    /// Workspaces in server order; absent means none.
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
}

/// Response body of `POST /public/envelope/list`.
#[derive(Debug, Deserialize)]
pub struct ListEnvelopesResponse {
    /// One page of envelopes in server order; absent means none.
    #[serde(default)]
    pub envelopes: Vec<Envelope>,
}

/// Response body of the document upload call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocumentResponse {
    /// Identifier of the created envelope; the server may omit it.
    #[serde(default)]
    pub envelope_uuid: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_workspaces_field_decodes_as_empty() {
        let response: ListWorkspacesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.workspaces.is_empty());
    }

    #[test]
    fn missing_envelope_uuid_decodes_as_none() {
        let response: UploadDocumentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.envelope_uuid, None);
    }

    #[test]
    fn envelope_uuid_decodes_from_camel_case() {
        let response: UploadDocumentResponse =
            serde_json::from_str(r#"{"envelopeUuid": "env-1"}"#).unwrap();
        assert_eq!(response.envelope_uuid.as_deref(), Some("env-1"));
    }
}
