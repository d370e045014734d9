//! Host capability adapters.

mod system_opener;
mod tokio_fs;

pub use system_opener::SystemUrlOpener;
pub use tokio_fs::TokioFileSystem;
