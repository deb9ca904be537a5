//! Key-value storage backends for meshmind.
//!
//! Every backend implements the `KvStore` trait from core; `build_store`
//! selects one from configuration. The bot's data (conversation histories,
//! the active model) fits the same two-method interface regardless of where
//! it lives.

pub mod file;
pub mod in_memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use file::FileStore;
pub use in_memory::MemoryStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use meshmind_config::StorageConfig;
use meshmind_core::error::StorageError;
use meshmind_core::storage::KvStore;
use std::sync::Arc;
use tracing::debug;

/// Build the configured storage backend.
///
/// Data files live under `config.path`: `meshmind.db` for sqlite,
/// `store.json` for the file backend.
pub async fn build_store(config: &StorageConfig) -> Result<Arc<dyn KvStore>, StorageError> {
    debug!(backend = %config.backend, path = %config.path.display(), "Building storage backend");
    match config.backend.as_str() {
        "memory" => Ok(Arc::new(MemoryStore::new())),

        "file" => Ok(Arc::new(FileStore::new(config.path.join("store.json")))),

        #[cfg(feature = "sqlite")]
        "sqlite" => {
            std::fs::create_dir_all(&config.path).map_err(|e| {
                StorageError::Backend(format!("Failed to create data directory: {e}"))
            })?;
            let path = config.path.join("meshmind.db");
            let store = SqliteStore::new(&path.to_string_lossy()).await?;
            Ok(Arc::new(store))
        }

        #[cfg(not(feature = "sqlite"))]
        "sqlite" => Err(StorageError::Backend(
            "sqlite backend not compiled in (enable the 'sqlite' feature)".into(),
        )),

        other => Err(StorageError::Backend(format!(
            "Unknown storage backend: {other}"
        ))),
    }
}
