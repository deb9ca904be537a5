//! File-based KV store — a single human-inspectable JSON file.
//!
//! The whole map is loaded at open and rewritten on every `set`. That is
//! plenty for a bot with a handful of mesh users; nodes with more traffic
//! should use the SQLite backend.
//!
//! Storage location: `<data_dir>/store.json`

use async_trait::async_trait;
use meshmind_core::error::StorageError;
use meshmind_core::storage::KvStore;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// A file-backed store using one JSON object for all keys.
///
/// Entries are loaded into memory at open and flushed to disk on every
/// `set`. Reads never touch the filesystem.
pub struct FileStore {
    path: PathBuf,
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl FileStore {
    /// Open a store at the given file path.
    ///
    /// If the file exists, entries are loaded from it. A missing or corrupt
    /// file starts empty; the file is created on first write.
    pub fn new(path: PathBuf) -> Self {
        let entries = Self::load_from_disk(&path);
        debug!(path = %path.display(), count = entries.len(), "File store loaded");
        Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    fn load_from_disk(path: &Path) -> HashMap<String, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            // Missing file starts empty
            Err(_) => return HashMap::new(),
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Store file corrupt, starting empty");
                HashMap::new()
            }
        }
    }

    /// Rewrite the whole store file from the in-memory map.
    async fn flush(&self) -> Result<(), StorageError> {
        let entries = self.entries.read().await;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::Backend(format!("Failed to create data directory: {e}"))
            })?;
        }

        let content = serde_json::to_string_pretty(&*entries)
            .map_err(|e| StorageError::Encode(e.to_string()))?;

        std::fs::write(&self.path, content)
            .map_err(|e| StorageError::Backend(format!("Failed to write store file: {e}")))?;

        Ok(())
    }
}

#[async_trait]
impl KvStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        self.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn set_persists_across_reopen() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_path_buf();
        drop(tmp);

        let store = FileStore::new(path.clone());
        store.set("history_abc", "[]").await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("history_abc"));

        // Reload from disk and find the entry again.
        let store2 = FileStore::new(path);
        assert_eq!(store2.get("history_abc").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_file_starts_empty() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "this is not json").unwrap();
        let path = tmp.path().to_path_buf();

        let store = FileStore::new(path);
        assert_eq!(store.get("history_abc").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_replaces_existing_value() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_path_buf();
        drop(tmp);

        let store = FileStore::new(path.clone());
        store.set("current_model", "llama3.2").await.unwrap();
        store.set("current_model", "phi3").await.unwrap();

        let store2 = FileStore::new(path);
        assert_eq!(
            store2.get("current_model").await.unwrap().as_deref(),
            Some("phi3")
        );
    }

    #[tokio::test]
    async fn creates_parent_directories_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = FileStore::new(path.clone());
        store.set("k", "v").await.unwrap();
        assert!(path.exists());
    }
}
