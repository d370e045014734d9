//! Subnoto Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer.

pub mod adapters;
pub mod api;
pub mod assets;
pub mod persistence;

pub use adapters::{SystemUrlOpener, TokioFileSystem};
pub use api::{API_BASE_URL, SubnotoApiClient, SubnotoClientFactory};
pub use assets::{AssetError, AssetUrlResolver, SESSION_WASM_FILE};
pub use persistence::{FilePreferencesRepository, preferences_path};
