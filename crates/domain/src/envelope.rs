//! Envelope domain types.

use serde::{Deserialize, Serialize};

/// Workflow state of an envelope on the Subnoto service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    /// Document is still being uploaded/processed.
    Uploading,
    /// Draft, not yet sent.
    Draft,
    /// Waiting for approvals.
    Approving,
    /// Waiting for signatures.
    Signing,
    /// All signatures and approvals collected.
    Complete,
    /// A recipient declined.
    Declined,
    /// The owner canceled the envelope.
    Canceled,
}

impl EnvelopeStatus {
    /// Returns the status as the lowercase wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uploading => "uploading",
            Self::Draft => "draft",
            Self::Approving => "approving",
            Self::Signing => "signing",
            Self::Complete => "complete",
            Self::Declined => "declined",
            Self::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for EnvelopeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The account that owns an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeOwner {
    /// Owner account identifier.
    pub uuid: String,
    /// Owner email address.
    pub email: String,
    /// Optional first name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    /// Optional last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

/// Signature and approval progress counters for an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeMetrics {
    /// Signatures collected so far.
    pub signature_count: u32,
    /// Signatures required in total.
    pub signature_required_count: u32,
    /// Approvals collected so far.
    pub approval_count: u32,
    /// Approvals required in total.
    pub approval_required_count: u32,
}

/// A document package with a signing/approval workflow.
///
/// Read-only snapshot from the server; successive pages are appended into an
/// in-memory sequence per screen session, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Envelope identifier.
    pub uuid: String,
    /// Envelope title.
    pub title: String,
    /// Creation timestamp (seconds or milliseconds since epoch).
    pub creation_date: i64,
    /// Last-update timestamp (seconds or milliseconds since epoch).
    pub update_date: i64,
    /// When the envelope was sent, if it has been.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_date: Option<i64>,
    /// Current workflow status.
    pub status: EnvelopeStatus,
    /// Identifier of the containing workspace.
    pub workspace_uuid: String,
    /// Owner of the envelope.
    pub owner: EnvelopeOwner,
    /// Progress counters.
    pub metrics: EnvelopeMetrics,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}
