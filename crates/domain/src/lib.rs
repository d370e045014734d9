//! Subnoto Domain - Core business types
//!
//! This crate defines the domain model for the Subnoto launcher extension.
//! All types here are pure Rust with no I/O dependencies.

pub mod envelope;
pub mod error;
pub mod links;
pub mod page;
pub mod preferences;
pub mod timestamp;
pub mod upload;
pub mod workspace;

pub use envelope::{Envelope, EnvelopeMetrics, EnvelopeOwner, EnvelopeStatus};
pub use error::{DomainError, DomainResult};
pub use links::{envelope_edit_url, workspace_envelopes_url};
pub use page::{ENVELOPES_PAGE_SIZE, EnvelopePage, has_more};
pub use preferences::Preferences;
pub use timestamp::{ApiTimestamp, format_timestamp};
pub use upload::{ACCEPTED_EXTENSIONS, DocumentUpload};
pub use workspace::Workspace;
