//! Key-value storage trait — the bot's only persistence seam.
//!
//! Everything the bot remembers (per-user conversation histories, the
//! active model selection) lives behind this two-method interface, keyed by
//! plain strings. Backends stay deliberately dumb: values are opaque
//! strings and the store never interprets them.

use crate::error::StorageError;
use async_trait::async_trait;

/// The core KvStore trait.
///
/// Implementations: SQLite, JSON file, in-memory (for testing).
#[async_trait]
pub trait KvStore: Send + Sync {
    /// The backend name (e.g., "sqlite", "file", "memory").
    fn name(&self) -> &str;

    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct ScratchStore {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl KvStore for ScratchStore {
        fn name(&self) -> &str {
            "scratch"
        }

        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn store_is_object_safe_and_roundtrips() {
        let store: Box<dyn KvStore> = Box::new(ScratchStore {
            entries: Mutex::new(HashMap::new()),
        });
        assert_eq!(store.get("missing").await.unwrap(), None);

        store.set("history_abc", "[]").await.unwrap();
        assert_eq!(
            store.get("history_abc").await.unwrap().as_deref(),
            Some("[]")
        );
    }
}
