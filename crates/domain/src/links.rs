//! Deep links into the Subnoto web application.

use url::Url;

use crate::error::{DomainError, DomainResult};

/// Base address of the Subnoto web application.
pub const APP_BASE_URL: &str = "https://app.subnoto.com";

/// Builds the edit page URL for a specific envelope:
/// `https://app.subnoto.com/envelopes/{workspace}/{envelope}/edit`.
///
/// # Errors
///
/// Returns an error if either identifier is empty or the URL cannot be
/// assembled.
pub fn envelope_edit_url(workspace_uuid: &str, envelope_uuid: &str) -> DomainResult<Url> {
    if workspace_uuid.is_empty() {
        return Err(DomainError::InvalidIdentifier("workspace uuid".into()));
    }
    if envelope_uuid.is_empty() {
        return Err(DomainError::InvalidIdentifier("envelope uuid".into()));
    }
    parse_app_url(&format!(
        "{APP_BASE_URL}/envelopes/{workspace_uuid}/{envelope_uuid}/edit"
    ))
}

/// Builds the all-envelopes page URL for a workspace:
/// `https://app.subnoto.com/envelopes/{workspace}/all`.
///
/// # Errors
///
/// Returns an error if the identifier is empty or the URL cannot be
/// assembled.
pub fn workspace_envelopes_url(workspace_uuid: &str) -> DomainResult<Url> {
    if workspace_uuid.is_empty() {
        return Err(DomainError::InvalidIdentifier("workspace uuid".into()));
    }
    parse_app_url(&format!("{APP_BASE_URL}/envelopes/{workspace_uuid}/all"))
}

fn parse_app_url(raw: &str) -> DomainResult<Url> {
    Url::parse(raw).map_err(|e| DomainError::InvalidUrl(format!("{e}: {raw}")))
}
