//! State for the envelope list screen.
//!
//! Two independent async loads feed this screen: the workspace list for
//! the filter dropdown and the envelope pages for the list itself. The
//! envelope side stamps each load with a generation so a response that
//! arrives after the filter changed is discarded instead of overwriting
//! the newer one.

use subnoto_application::ApplicationError;
use subnoto_domain::{Envelope, EnvelopePage, Workspace};

use crate::rows::EnvelopeRow;

/// Proof of which load a result belongs to. Handed out when a load
/// starts; a result presented with a superseded ticket is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// View model for the filterable, paginated envelope list.
#[derive(Debug, Default)]
pub struct EnvelopeListState {
    workspaces: Vec<Workspace>,
    workspaces_loading: bool,
    selected_workspace: String,
    envelopes: Vec<Envelope>,
    loading: bool,
    error: Option<String>,
    page: u32,
    has_more: bool,
    loading_more: bool,
    generation: u64,
}

impl EnvelopeListState {
    /// Creates an empty state with no filter selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- workspace dropdown ---

    /// Marks the dropdown workspace load as started.
    pub fn begin_workspaces_load(&mut self) {
        self.workspaces_loading = true;
    }

    /// Applies the dropdown load result. A failure leaves the dropdown
    /// empty; the envelope list keeps working unfiltered.
    pub fn finish_workspaces_load(&mut self, result: Result<Vec<Workspace>, ApplicationError>) {
        if let Ok(workspaces) = result {
            self.workspaces = workspaces;
        }
        self.workspaces_loading = false;
    }

    /// Workspaces for the filter dropdown.
    #[must_use]
    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    // --- filtering and initial page ---

    /// Selects a workspace filter (empty string means all) and starts a
    /// fresh first-page load, superseding any in-flight one.
    pub fn set_filter(&mut self, workspace_uuid: impl Into<String>) -> LoadTicket {
        self.selected_workspace = workspace_uuid.into();
        self.restart_load()
    }

    /// Re-runs the current filter from page one.
    pub fn refresh(&mut self) -> LoadTicket {
        self.restart_load()
    }

    fn restart_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.loading_more = false;
        self.error = None;
        self.page = 1;
        self.has_more = false;
        self.envelopes.clear();
        LoadTicket(self.generation)
    }

    /// Current filter, `None` when showing all workspaces.
    #[must_use]
    pub fn workspace_filter(&self) -> Option<&str> {
        if self.selected_workspace.is_empty() {
            None
        } else {
            Some(&self.selected_workspace)
        }
    }

    /// Applies a first-page result. Returns `false` when the ticket was
    /// superseded and the result discarded; the newer load owns the
    /// loading flag in that case.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<EnvelopePage, ApplicationError>,
    ) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match result {
            Ok(page) => {
                self.envelopes = page.envelopes;
                self.page = page.page;
                self.has_more = page.has_more;
            }
            Err(e) => {
                self.envelopes.clear();
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
        true
    }

    // --- load more ---

    /// Starts a load of the next page, unless one is already pending or
    /// there is nothing more to fetch. Returns the ticket and the page
    /// number to request.
    pub fn begin_load_more(&mut self) -> Option<(LoadTicket, u32)> {
        if self.loading || self.loading_more || !self.has_more {
            return None;
        }
        self.loading_more = true;
        Some((LoadTicket(self.generation), self.page + 1))
    }

    /// Appends a next-page result. Stale tickets (filter changed while
    /// the page was in flight) are discarded.
    pub fn finish_load_more(
        &mut self,
        ticket: LoadTicket,
        result: Result<EnvelopePage, ApplicationError>,
    ) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match result {
            Ok(page) => {
                self.envelopes.extend(page.envelopes);
                self.page = page.page;
                self.has_more = page.has_more;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading_more = false;
        true
    }

    // --- rendering ---

    /// Whether either of the screen's loads is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading || self.workspaces_loading
    }

    /// Whether the host should offer a "load more" affordance.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Error message from the last envelope load, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Envelopes accumulated so far, in fetch order.
    #[must_use]
    pub fn envelopes(&self) -> &[Envelope] {
        &self.envelopes
    }

    /// Rows for the host list view.
    #[must_use]
    pub fn rows(&self) -> Vec<EnvelopeRow> {
        self.envelopes.iter().map(EnvelopeRow::from).collect()
    }

    /// Title and description for the empty view.
    #[must_use]
    pub fn empty_view(&self) -> (String, String) {
        if let Some(message) = &self.error {
            return ("Failed to load envelopes".into(), message.clone());
        }
        let description = match self.workspace_filter() {
            None => "No envelopes across your workspaces.".to_string(),
            Some(uuid) => self
                .workspaces
                .iter()
                .find(|w| w.uuid == uuid)
                .map_or_else(String::new, |w| {
                    format!("No envelopes in \"{}\" yet.", w.name)
                }),
        };
        ("No envelopes".into(), description)
    }
}
