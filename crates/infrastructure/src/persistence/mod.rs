//! Preference storage.

mod preferences_repository;

pub use preferences_repository::{FilePreferencesRepository, preferences_path};
