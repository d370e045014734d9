//! File-based preferences repository.
//!
//! The launcher host stores extension preferences for us; this adapter
//! reads them from `preferences.json` under the user config directory,
//! with environment variables taking precedence for both keys. The file
//! holds secrets and should stay out of version control.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use subnoto_application::ports::{PreferencesError, PreferencesProvider};
use subnoto_domain::Preferences;

const ACCESS_KEY_ENV: &str = "SUBNOTO_ACCESS_KEY";
const SECRET_KEY_ENV: &str = "SUBNOTO_SECRET_KEY";

/// Default preferences location:
/// `{config_dir}/subnoto-launcher/preferences.json`.
#[must_use]
pub fn preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("subnoto-launcher").join("preferences.json"))
}

/// On-disk preference file shape:
/// ```json
/// { "accessKey": "...", "secretKey": "..." }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPreferences {
    #[serde(default)]
    access_key: Option<String>,
    #[serde(default)]
    secret_key: Option<String>,
}

/// Reads the two API secrets from disk and the environment.
#[derive(Debug, Clone)]
pub struct FilePreferencesRepository {
    path: Option<PathBuf>,
}

impl FilePreferencesRepository {
    /// Creates a repository reading from the default config location.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: preferences_path(),
        }
    }

    /// Creates a repository reading from an explicit file path.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn stored(&self) -> Result<StoredPreferences, PreferencesError> {
        let Some(path) = self.path.as_deref().filter(|p| p.exists()) else {
            return Ok(StoredPreferences {
                access_key: None,
                secret_key: None,
            });
        };
        Self::read_file(path)
    }

    fn read_file(path: &Path) -> Result<StoredPreferences, PreferencesError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PreferencesError::Unreadable(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| PreferencesError::Unreadable(format!("{}: {e}", path.display())))
    }
}

impl Default for FilePreferencesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferencesProvider for FilePreferencesRepository {
    fn preferences(&self) -> Result<Preferences, PreferencesError> {
        let stored = self.stored()?;

        let access_key = std::env::var(ACCESS_KEY_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .or(stored.access_key)
            .filter(|v| !v.is_empty())
            .ok_or(PreferencesError::Missing("API access key"))?;

        let secret_key = std::env::var(SECRET_KEY_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .or(stored.secret_key)
            .filter(|v| !v.is_empty())
            .ok_or(PreferencesError::Missing("API secret key"))?;

        Ok(Preferences::new(access_key, secret_key))
    }
}
