//! Conversation store — history and model state on top of the KV seam.
//!
//! Storage schema:
//! - `history_<sender>`: JSON array of `{role, content}` messages
//! - `current_model`: the admin-selected model, shared by all users

use meshmind_core::error::StorageError;
use meshmind_core::message::History;
use meshmind_core::storage::KvStore;
use meshmind_core::transport::SenderId;
use std::sync::Arc;
use tracing::{debug, warn};

/// Key prefix for per-user history blobs.
const HISTORY_KEY_PREFIX: &str = "history_";

/// Key holding the globally active model name.
const ACTIVE_MODEL_KEY: &str = "current_model";

/// Reads and writes conversation state through a [`KvStore`].
#[derive(Clone)]
pub struct ConversationStore {
    kv: Arc<dyn KvStore>,
}

impl ConversationStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    fn history_key(sender: &SenderId) -> String {
        format!("{HISTORY_KEY_PREFIX}{sender}")
    }

    /// Load a sender's history.
    ///
    /// An absent key, a failed read, and an undecodable blob all yield an
    /// empty history. A bad record must never take down the request path;
    /// the worst outcome is a conversation that starts over.
    pub async fn load(&self, sender: &SenderId) -> History {
        let key = Self::history_key(sender);
        let raw = match self.kv.get(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return History::new(),
            Err(e) => {
                warn!(%sender, error = %e, "History read failed, starting fresh");
                return History::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(history) => history,
            Err(e) => {
                warn!(%sender, error = %e, "Stored history undecodable, starting fresh");
                History::new()
            }
        }
    }

    /// Persist a sender's history exactly as given.
    pub async fn save(&self, sender: &SenderId, history: &History) -> Result<(), StorageError> {
        let encoded =
            serde_json::to_string(history).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.kv.set(&Self::history_key(sender), &encoded).await?;
        debug!(%sender, messages = history.len(), "History saved");
        Ok(())
    }

    /// Reset a sender's history to empty.
    pub async fn clear(&self, sender: &SenderId) -> Result<(), StorageError> {
        self.kv.set(&Self::history_key(sender), "[]").await
    }

    /// The active model, or `default` when none has been stored.
    pub async fn active_model(&self, default: &str) -> String {
        match self.kv.get(ACTIVE_MODEL_KEY).await {
            Ok(Some(model)) => model,
            Ok(None) => default.to_string(),
            Err(e) => {
                warn!(error = %e, "Active model read failed, using default");
                default.to_string()
            }
        }
    }

    /// Switch the active model for all senders.
    pub async fn set_active_model(&self, model: &str) -> Result<(), StorageError> {
        self.kv.set(ACTIVE_MODEL_KEY, model).await
    }

    /// Name of the backing store, for status reports.
    pub fn backend_name(&self) -> &str {
        self.kv.name()
    }
}
