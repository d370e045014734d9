//! Factory for per-invocation API clients.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use subnoto_application::ports::{ApiError, SigningClientFactory};
use subnoto_domain::Preferences;

use crate::assets;

use super::client::{API_BASE_URL, SubnotoApiClient};

const USER_AGENT: &str = concat!("SubnotoLauncher/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds a fresh [`SubnotoApiClient`] for each command invocation.
///
/// The factory owns the bundled-assets directory and installs the session
/// WASM resolver before the first client is built, mirroring the vendor
/// requirement that asset resolution be in place before its module loads.
pub struct SubnotoClientFactory {
    assets_dir: PathBuf,
}

impl SubnotoClientFactory {
    /// Creates a factory resolving bundled assets under `assets_dir`.
    #[must_use]
    pub const fn new(assets_dir: PathBuf) -> Self {
        Self { assets_dir }
    }
}

impl SigningClientFactory for SubnotoClientFactory {
    type Client = SubnotoApiClient;

    fn create(&self, preferences: &Preferences) -> Result<Self::Client, ApiError> {
        // Must precede any vendor session setup; repeat calls are no-ops.
        assets::install(&self.assets_dir)
            .map_err(|e| ApiError::ClientConstruction(e.to_string()))?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::ClientConstruction(e.to_string()))?;

        let base_url = Url::parse(API_BASE_URL)
            .map_err(|e| ApiError::ClientConstruction(format!("{e}: {API_BASE_URL}")))?;

        Ok(SubnotoApiClient::new(http, base_url, preferences.clone()))
    }
}
