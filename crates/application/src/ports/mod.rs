//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer.

mod file_system;
mod preferences;
mod signing_client;
mod url_opener;

pub use file_system::{FileSystem, FileSystemError};
pub use preferences::{PreferencesError, PreferencesProvider};
pub use signing_client::{
    ApiError, SigningClient, SigningClientFactory, UploadRequest, UploadResponse,
};
pub use url_opener::{OpenError, UrlOpener};
