//! Per-screen view-model state.

mod envelope_list;
mod upload_form;
mod workspace_list;

pub use envelope_list::{EnvelopeListState, LoadTicket};
pub use upload_form::{UploadFormState, UploadFormValues};
pub use workspace_list::WorkspaceListState;
