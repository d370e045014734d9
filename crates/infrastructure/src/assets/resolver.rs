//! Session WASM asset URL resolver.
//!
//! The vendor SDK locates its bundled enclave-session binary by resolving
//! `oak_session_wasm_nodejs_bg.wasm` relative to its own module location.
//! Inside the launcher bundle that module-relative base does not exist, so
//! URL construction for exactly that file, and only that file, is given
//! the extension's assets directory as base instead. Every other URL
//! resolves unchanged.

use std::path::Path;
use std::sync::OnceLock;

use url::Url;

/// File name of the vendor's bundled session WASM binary.
pub const SESSION_WASM_FILE: &str = "oak_session_wasm_nodejs_bg.wasm";

/// Errors from asset URL resolution.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The assets directory could not be expressed as a file URL.
    #[error("invalid assets directory: {0}")]
    InvalidAssetsDir(String),

    /// A URL could not be parsed or joined.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The session asset was requested before a base was installed.
    #[error("asset resolver not installed")]
    NotInstalled,
}

/// Resolves URL construction, substituting the assets-directory base for
/// the known session WASM file when the caller supplied no base.
#[derive(Debug, Clone)]
pub struct AssetUrlResolver {
    wasm_base: Url,
}

impl AssetUrlResolver {
    /// Creates a resolver whose substitute base is `assets_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory path cannot be turned into a
    /// file URL.
    pub fn new(assets_dir: &Path) -> Result<Self, AssetError> {
        let wasm_base = Url::from_directory_path(assets_dir)
            .map_err(|()| AssetError::InvalidAssetsDir(assets_dir.display().to_string()))?;
        Ok(Self { wasm_base })
    }

    /// Resolves `input` against `base`, exactly as a URL constructor
    /// would, except that the session WASM file with no base gets the
    /// assets directory substituted.
    ///
    /// Substitution applies iff `base` is `None` and `input` is the exact
    /// asset file name or ends with it. Absolute URLs and explicit bases
    /// always pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is not resolvable at all, e.g. a
    /// relative path other than the session asset with no base.
    pub fn resolve(&self, input: &str, base: Option<&Url>) -> Result<Url, AssetError> {
        let invalid = |e: url::ParseError| AssetError::InvalidUrl(format!("{e}: {input}"));

        if let Some(base) = base {
            return base.join(input).map_err(invalid);
        }
        if input == SESSION_WASM_FILE || input.ends_with(SESSION_WASM_FILE) {
            return self.wasm_base.join(input).map_err(invalid);
        }
        Url::parse(input).map_err(invalid)
    }
}

static INSTALLED: OnceLock<AssetUrlResolver> = OnceLock::new();

/// Installs the process-wide resolver for `assets_dir`.
///
/// Idempotent: the first installation wins and later calls are no-ops, so
/// the factory can call this on every client build.
///
/// # Errors
///
/// Returns an error if the directory cannot be expressed as a file URL.
pub fn install(assets_dir: &Path) -> Result<(), AssetError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let resolver = AssetUrlResolver::new(assets_dir)?;
    let _ = INSTALLED.set(resolver);
    Ok(())
}

/// Returns the installed resolver, if any.
#[must_use]
pub fn installed() -> Option<&'static AssetUrlResolver> {
    INSTALLED.get()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn resolver() -> AssetUrlResolver {
        AssetUrlResolver::new(Path::new("/ext/assets")).unwrap()
    }

    #[test]
    fn exact_asset_name_without_base_is_rewritten() {
        let url = resolver().resolve(SESSION_WASM_FILE, None).unwrap();
        assert_eq!(
            url.as_str(),
            "file:///ext/assets/oak_session_wasm_nodejs_bg.wasm"
        );
    }

    #[test]
    fn suffix_match_without_base_is_rewritten() {
        let url = resolver()
            .resolve("pkg/oak_session_wasm_nodejs_bg.wasm", None)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "file:///ext/assets/pkg/oak_session_wasm_nodejs_bg.wasm"
        );
    }

    #[test]
    fn asset_name_with_explicit_base_passes_through() {
        let base = Url::parse("https://cdn.example.com/sdk/").unwrap();
        let url = resolver()
            .resolve(SESSION_WASM_FILE, Some(&base))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://cdn.example.com/sdk/oak_session_wasm_nodejs_bg.wasm"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let url = resolver()
            .resolve("https://example.com/other.wasm", None)
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/other.wasm");
    }

    #[test]
    fn other_relative_names_are_not_rewritten() {
        let err = resolver().resolve("other_module_bg.wasm", None).unwrap_err();
        assert!(matches!(err, AssetError::InvalidUrl(_)));
    }

    #[test]
    fn other_names_with_base_resolve_against_that_base() {
        let base = Url::parse("https://example.com/a/").unwrap();
        let url = resolver().resolve("b.js", Some(&base)).unwrap();
        assert_eq!(url.as_str(), "https://example.com/a/b.js");
    }

    #[test]
    fn install_is_idempotent() {
        install(Path::new("/ext/assets")).unwrap();
        let first = installed().unwrap().clone();
        // A second install with a different directory changes nothing.
        install(Path::new("/elsewhere")).unwrap();
        let second = installed().unwrap();
        assert_eq!(
            first.resolve(SESSION_WASM_FILE, None).unwrap(),
            second.resolve(SESSION_WASM_FILE, None).unwrap()
        );
    }
}
