//! Bundled-asset URL resolution.

mod resolver;

pub use resolver::{AssetError, AssetUrlResolver, SESSION_WASM_FILE, install, installed};
