//! Subnoto UI - View models for the host-rendered command screens
//!
//! The launcher host owns rendering; this crate holds the state each of
//! the three command screens binds to, including loading/error/empty
//! handling, stale-response discarding, and row formatting.

pub mod rows;
pub mod state;

pub use rows::{EnvelopeRow, UI_LIST_PAGE_SIZE, WorkspaceRow};
pub use state::{
    EnvelopeListState, LoadTicket, UploadFormState, UploadFormValues, WorkspaceListState,
};
