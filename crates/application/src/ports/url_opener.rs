//! URL opener port.

use url::Url;

/// Errors from handing a URL to the system browser.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    /// The host could not launch a browser for the URL.
    #[error("failed to open {url}: {message}")]
    LaunchFailed {
        /// The URL that was being opened.
        url: Url,
        /// Underlying error text.
        message: String,
    },
}

/// The host's "open URL in the default browser" capability.
///
/// Fire-and-forget: callers do not verify that the browser actually
/// displayed the page.
pub trait UrlOpener: Send + Sync {
    /// Opens the URL in the system browser.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser could not be launched at all.
    fn open(&self, url: &Url) -> Result<(), OpenError>;
}
