//! System browser adapter.

use url::Url;

use subnoto_application::ports::{OpenError, UrlOpener};

/// Opens URLs in the user's default browser via the `open` crate.
///
/// Detached launch: the command returns as soon as the browser process is
/// spawned, matching the fire-and-forget contract of the port.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl SystemUrlOpener {
    /// Creates a new `SystemUrlOpener`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &Url) -> Result<(), OpenError> {
        open::that_detached(url.as_str()).map_err(|e| OpenError::LaunchFailed {
            url: url.clone(),
            message: e.to_string(),
        })
    }
}
