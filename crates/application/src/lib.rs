//! Subnoto Application - Ports and use cases
//!
//! This crate holds the command orchestration: port traits implemented by
//! infrastructure adapters, and one use case per launcher command.

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{
    ApiError, FileSystem, FileSystemError, OpenError, PreferencesError, PreferencesProvider,
    SigningClient, SigningClientFactory, UploadRequest, UploadResponse, UrlOpener,
};
pub use use_cases::{
    ListEnvelopes, ListEnvelopesInput, ListWorkspaces, UploadDocument, UploadDocumentInput,
    UploadDocumentOutput,
};
