//! State for the workspace list screen.

use subnoto_application::ApplicationError;
use subnoto_domain::Workspace;

use crate::rows::WorkspaceRow;

/// View model for the read-only, refreshable workspace list.
#[derive(Debug, Default)]
pub struct WorkspaceListState {
    workspaces: Vec<Workspace>,
    loading: bool,
    error: Option<String>,
}

impl WorkspaceListState {
    /// Creates an empty state; the screen starts loading immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a (re)load as started. Clears any previous error; a refresh
    /// after a failure starts from a clean slate.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies the load result. The loading flag clears on every path.
    pub fn finish_load(&mut self, result: Result<Vec<Workspace>, ApplicationError>) {
        match result {
            Ok(workspaces) => self.workspaces = workspaces,
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    /// Whether a load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error message from the last load, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Rows for the host list view.
    #[must_use]
    pub fn rows(&self) -> Vec<WorkspaceRow> {
        self.workspaces.iter().map(WorkspaceRow::from).collect()
    }

    /// Title and description for the empty view.
    #[must_use]
    pub fn empty_view(&self) -> (String, String) {
        match &self.error {
            Some(message) => ("Failed to load workspaces".into(), message.clone()),
            None => (
                "No workspaces".into(),
                "You don't have any Subnoto workspaces yet.".into(),
            ),
        }
    }
}
