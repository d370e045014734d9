//! Extension preferences supplied by the host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two secrets required to talk to the Subnoto API.
///
/// Both values come from host-managed preference storage and have no
/// defaults. Immutable for the duration of a command invocation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// API access key from the Subnoto dashboard.
    pub access_key: String,
    /// API secret key from the Subnoto dashboard.
    pub secret_key: String,
}

impl Preferences {
    /// Creates preferences from the two required secrets.
    #[must_use]
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

// Secrets must never end up in logs or error chains.
impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences")
            .field("access_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
