//! List workspaces use case.

use subnoto_domain::{Preferences, Workspace};

use crate::error::ApplicationResult;
use crate::ports::{SigningClient, SigningClientFactory};

/// Use case for listing all workspaces visible to the credentials.
///
/// One request/response round trip; workspaces come back in server order
/// and an empty result is a success.
pub struct ListWorkspaces<F: SigningClientFactory> {
    factory: F,
}

impl<F: SigningClientFactory> ListWorkspaces<F> {
    /// Creates a new `ListWorkspaces` use case.
    #[must_use]
    pub const fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Fetches the workspace list.
    ///
    /// # Errors
    ///
    /// Returns a credentials error if the client cannot be built or the
    /// call fails.
    pub async fn execute(&self, preferences: &Preferences) -> ApplicationResult<Vec<Workspace>> {
        let client = self.factory.create(preferences)?;
        let workspaces = client.list_workspaces().await?;
        tracing::debug!(count = workspaces.len(), "fetched workspaces");
        Ok(workspaces)
    }
}
