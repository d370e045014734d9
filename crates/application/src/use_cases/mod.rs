//! Use cases, one per launcher command.

mod list_envelopes;
mod list_workspaces;
#[cfg(test)]
pub(crate) mod test_support;
mod upload_document;

pub use list_envelopes::{ListEnvelopes, ListEnvelopesInput};
pub use list_workspaces::ListWorkspaces;
pub use upload_document::{UploadDocument, UploadDocumentInput, UploadDocumentOutput};
