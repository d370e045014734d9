//! Workspace domain type.

use serde::{Deserialize, Serialize};

/// A Subnoto workspace: a tenant container grouping envelopes and members.
///
/// Server-owned and read-only; fetched fresh on each command invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// Workspace identifier.
    pub uuid: String,
    /// Display name.
    pub name: String,
    /// Creation timestamp (seconds or milliseconds since epoch).
    pub creation_date: i64,
    /// Last-update timestamp (seconds or milliseconds since epoch).
    pub update_date: i64,
    /// Number of members in the workspace.
    pub members_count: u32,
}
