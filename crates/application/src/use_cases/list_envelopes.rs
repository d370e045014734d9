//! List envelopes use case.

use subnoto_domain::{EnvelopePage, Preferences};

use crate::error::ApplicationResult;
use crate::ports::{SigningClient, SigningClientFactory};

/// Input for fetching one page of envelopes.
#[derive(Debug, Clone, Default)]
pub struct ListEnvelopesInput {
    /// Workspace to filter on. `None` or an empty string means all
    /// workspaces.
    pub workspace_filter: Option<String>,
    /// 1-based page number.
    pub page: u32,
}

impl ListEnvelopesInput {
    /// First page across all workspaces.
    #[must_use]
    pub const fn first_page() -> Self {
        Self {
            workspace_filter: None,
            page: 1,
        }
    }
}

/// Use case for listing envelopes, one fixed-size page at a time.
///
/// Continuation is inferred from the returned batch size; see
/// [`subnoto_domain::page::has_more`].
pub struct ListEnvelopes<F: SigningClientFactory> {
    factory: F,
}

impl<F: SigningClientFactory> ListEnvelopes<F> {
    /// Creates a new `ListEnvelopes` use case.
    #[must_use]
    pub const fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Fetches one page of envelopes.
    ///
    /// An empty-string filter is treated exactly like no filter: the
    /// workspace field never reaches the wire in that case.
    ///
    /// # Errors
    ///
    /// Returns a credentials error if the client cannot be built or the
    /// call fails.
    pub async fn execute(
        &self,
        preferences: &Preferences,
        input: ListEnvelopesInput,
    ) -> ApplicationResult<EnvelopePage> {
        let page = input.page.max(1);
        let filter = input
            .workspace_filter
            .as_deref()
            .filter(|uuid| !uuid.is_empty());

        let client = self.factory.create(preferences)?;
        let envelopes = client.list_envelopes(filter, page).await?;
        tracing::debug!(
            count = envelopes.len(),
            page,
            filtered = filter.is_some(),
            "fetched envelope page"
        );
        Ok(EnvelopePage::new(envelopes, page))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::use_cases::test_support::{MockBehavior, MockFactory, envelope};

    use super::*;

    fn prefs() -> Preferences {
        Preferences::new("ak", "sk")
    }

    #[tokio::test]
    async fn empty_filter_is_normalized_away() {
        let factory = MockFactory::new(MockBehavior::default());
        let log = std::sync::Arc::clone(&factory.log);
        let use_case = ListEnvelopes::new(factory);

        use_case
            .execute(
                &prefs(),
                ListEnvelopesInput {
                    workspace_filter: Some(String::new()),
                    page: 1,
                },
            )
            .await
            .unwrap();

        let calls = log.envelope_calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(None, 1)]);
    }

    #[tokio::test]
    async fn non_empty_filter_is_passed_verbatim() {
        let factory = MockFactory::new(MockBehavior::default());
        let log = std::sync::Arc::clone(&factory.log);
        let use_case = ListEnvelopes::new(factory);

        use_case
            .execute(
                &prefs(),
                ListEnvelopesInput {
                    workspace_filter: Some("ws-7".into()),
                    page: 3,
                },
            )
            .await
            .unwrap();

        let calls = log.envelope_calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(Some("ws-7".to_string()), 3)]);
    }

    #[tokio::test]
    async fn full_page_reports_more() {
        let batch: Vec<_> = (0..50).map(|i| envelope(&format!("e{i}"), "ws")).collect();
        let factory = MockFactory::new(MockBehavior {
            envelopes: Ok(batch),
            ..MockBehavior::default()
        });
        let use_case = ListEnvelopes::new(factory);

        let page = use_case
            .execute(&prefs(), ListEnvelopesInput::first_page())
            .await
            .unwrap();
        assert!(page.has_more);
        assert_eq!(page.envelopes.len(), 50);
    }

    #[tokio::test]
    async fn partial_page_reports_no_more() {
        let batch: Vec<_> = (0..49).map(|i| envelope(&format!("e{i}"), "ws")).collect();
        let factory = MockFactory::new(MockBehavior {
            envelopes: Ok(batch),
            ..MockBehavior::default()
        });
        let use_case = ListEnvelopes::new(factory);

        let page = use_case
            .execute(&prefs(), ListEnvelopesInput::first_page())
            .await
            .unwrap();
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn page_zero_is_clamped_to_one() {
        let factory = MockFactory::new(MockBehavior::default());
        let log = std::sync::Arc::clone(&factory.log);
        let use_case = ListEnvelopes::new(factory);

        use_case
            .execute(
                &prefs(),
                ListEnvelopesInput {
                    workspace_filter: None,
                    page: 0,
                },
            )
            .await
            .unwrap();

        let calls = log.envelope_calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(None, 1)]);
    }

    #[tokio::test]
    async fn failure_maps_to_credentials_message() {
        let factory = MockFactory::new(MockBehavior {
            envelopes: Err("401".into()),
            ..MockBehavior::default()
        });
        let use_case = ListEnvelopes::new(factory);

        let err = use_case
            .execute(&prefs(), ListEnvelopesInput::first_page())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to fetch envelopes. Please check your API credentials."
        );
    }
}
