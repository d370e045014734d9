//! Preferences provider port.

use subnoto_domain::Preferences;

/// Errors that can occur while reading host preferences.
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    /// A required preference has no value.
    #[error("Missing required preference: {0}. Set it in the extension preferences.")]
    Missing(&'static str),

    /// The preference store could not be read.
    #[error("Failed to read preferences: {0}")]
    Unreadable(String),
}

/// Read-only access to the two API secrets held by the host.
///
/// Values are immutable per command invocation; there are no defaults.
pub trait PreferencesProvider: Send + Sync {
    /// Returns the preferences for the current invocation.
    ///
    /// # Errors
    ///
    /// Returns an error if either secret is missing or the store cannot be
    /// read.
    fn preferences(&self) -> Result<Preferences, PreferencesError>;
}

impl PreferencesProvider for Preferences {
    fn preferences(&self) -> Result<Preferences, PreferencesError> {
        Ok(self.clone())
    }
}
