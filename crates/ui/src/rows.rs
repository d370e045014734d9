//! List-row formatting for the host's list views.

use url::Url;

use subnoto_domain::{
    Envelope, Workspace, envelope_edit_url, format_timestamp, workspace_envelopes_url,
};

/// Rows revealed per "load more" step in the host list view. Distinct from
/// the API page size of 50.
pub const UI_LIST_PAGE_SIZE: usize = 20;

/// A workspace rendered as one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRow {
    /// Row title: the workspace name.
    pub title: String,
    /// Row subtitle: member count with pluralization.
    pub subtitle: String,
    /// Accessory text: the workspace uuid, also the copy target.
    pub uuid: String,
    /// Deep link to all envelopes of the workspace, when valid.
    pub open_url: Option<Url>,
}

impl From<&Workspace> for WorkspaceRow {
    fn from(workspace: &Workspace) -> Self {
        let plural = if workspace.members_count == 1 { "" } else { "s" };
        Self {
            title: workspace.name.clone(),
            subtitle: format!("{} member{plural}", workspace.members_count),
            uuid: workspace.uuid.clone(),
            open_url: workspace_envelopes_url(&workspace.uuid).ok(),
        }
    }
}

/// An envelope rendered as one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeRow {
    /// Row title; empty envelope titles fall back to "Untitled".
    pub title: String,
    /// Row subtitle: the workflow status.
    pub subtitle: String,
    /// Accessory text: formatted update date.
    pub updated: String,
    /// Accessory text: signature progress, e.g. `1/3 signatures`.
    pub signatures: String,
    /// Search keywords: status plus tags.
    pub keywords: Vec<String>,
    /// The envelope uuid, also the copy target.
    pub uuid: String,
    /// Deep link to the envelope edit page, when valid.
    pub open_url: Option<Url>,
}

impl From<&Envelope> for EnvelopeRow {
    fn from(envelope: &Envelope) -> Self {
        let title = if envelope.title.is_empty() {
            "Untitled".to_string()
        } else {
            envelope.title.clone()
        };
        let mut keywords = vec![envelope.status.to_string()];
        keywords.extend(envelope.tags.iter().cloned());
        Self {
            title,
            subtitle: envelope.status.to_string(),
            updated: format_timestamp(envelope.update_date),
            signatures: format!(
                "{}/{} signatures",
                envelope.metrics.signature_count, envelope.metrics.signature_required_count
            ),
            keywords,
            uuid: envelope.uuid.clone(),
            open_url: envelope_edit_url(&envelope.workspace_uuid, &envelope.uuid).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use subnoto_domain::{EnvelopeMetrics, EnvelopeOwner, EnvelopeStatus};

    use super::*;

    fn workspace(members: u32) -> Workspace {
        Workspace {
            uuid: "ws-1".into(),
            name: "Legal".into(),
            creation_date: 1_700_000_000,
            update_date: 1_700_000_000,
            members_count: members,
        }
    }

    fn envelope(title: &str) -> Envelope {
        Envelope {
            uuid: "env-1".into(),
            title: title.into(),
            creation_date: 1_700_000_000,
            update_date: 1_700_000_000,
            sent_date: None,
            status: EnvelopeStatus::Signing,
            workspace_uuid: "ws-1".into(),
            owner: EnvelopeOwner {
                uuid: "u".into(),
                email: "u@example.com".into(),
                firstname: None,
                lastname: None,
            },
            metrics: EnvelopeMetrics {
                signature_count: 1,
                signature_required_count: 3,
                approval_count: 0,
                approval_required_count: 0,
            },
            tags: vec!["legal".into()],
        }
    }

    #[test]
    fn member_count_pluralizes() {
        assert_eq!(WorkspaceRow::from(&workspace(1)).subtitle, "1 member");
        assert_eq!(WorkspaceRow::from(&workspace(4)).subtitle, "4 members");
        assert_eq!(WorkspaceRow::from(&workspace(0)).subtitle, "0 members");
    }

    #[test]
    fn workspace_row_links_to_all_envelopes() {
        let row = WorkspaceRow::from(&workspace(2));
        assert_eq!(
            row.open_url.unwrap().as_str(),
            "https://app.subnoto.com/envelopes/ws-1/all"
        );
    }

    #[test]
    fn empty_title_falls_back_to_untitled() {
        assert_eq!(EnvelopeRow::from(&envelope("")).title, "Untitled");
        assert_eq!(EnvelopeRow::from(&envelope("NDA")).title, "NDA");
    }

    #[test]
    fn envelope_row_formats_progress_and_keywords() {
        let row = EnvelopeRow::from(&envelope("NDA"));
        assert_eq!(row.subtitle, "signing");
        assert_eq!(row.signatures, "1/3 signatures");
        assert_eq!(row.keywords, vec!["signing".to_string(), "legal".into()]);
        assert_eq!(row.updated, "14 Nov 2023, 22:13");
        assert_eq!(
            row.open_url.unwrap().as_str(),
            "https://app.subnoto.com/envelopes/ws-1/env-1/edit"
        );
    }
}
