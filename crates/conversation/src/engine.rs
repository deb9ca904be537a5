//! Chat engine — composes requests and folds replies back into history.

use crate::store::ConversationStore;
use meshmind_core::error::{InferenceError, StorageError};
use meshmind_core::inference::InferenceClient;
use meshmind_core::message::{History, Message};
use meshmind_core::storage::KvStore;
use meshmind_core::transport::SenderId;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs one conversational turn per request.
///
/// Each sender gets an isolated history; the active model and the system
/// prompt are shared. Cloning is cheap and every clone operates on the
/// same underlying store.
#[derive(Clone)]
pub struct ChatEngine {
    store: ConversationStore,
    client: Arc<dyn InferenceClient>,
    system_prompt: String,
    default_model: String,
    max_history: usize,
}

impl ChatEngine {
    pub fn new(
        kv: Arc<dyn KvStore>,
        client: Arc<dyn InferenceClient>,
        system_prompt: impl Into<String>,
        default_model: impl Into<String>,
        max_history: usize,
    ) -> Self {
        Self {
            store: ConversationStore::new(kv),
            client,
            system_prompt: system_prompt.into(),
            default_model: default_model.into(),
            max_history,
        }
    }

    /// Compose the outbound message list: system prompt first, then the
    /// sender's history verbatim. The system message is never persisted.
    fn build_messages(system_prompt: &str, history: &History) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(Message::system(system_prompt));
        messages.extend_from_slice(history.messages());
        messages
    }

    /// Run one full ask turn for a sender.
    ///
    /// On success the user/assistant pair is appended, the history trimmed
    /// to the configured bound, and the result saved. On inference failure
    /// nothing is persisted, so the next ask starts from the last good state.
    pub async fn ask(&self, sender: &SenderId, prompt: &str) -> Result<String, InferenceError> {
        let mut history = self.store.load(sender).await;
        history.push(Message::user(prompt));

        let messages = Self::build_messages(&self.system_prompt, &history);
        let model = self.store.active_model(&self.default_model).await;

        info!(%sender, model = %model, messages = messages.len(), "Processing ask");

        let reply = self.client.chat(&model, &messages).await?;

        history.push(Message::assistant(reply.clone()));
        history.truncate_to_turns(self.max_history);
        if let Err(e) = self.store.save(sender, &history).await {
            // The sender still gets the reply; this turn just isn't remembered.
            warn!(%sender, error = %e, "Failed to persist history after reply");
        }

        debug!(%sender, reply_len = reply.len(), "Ask completed");
        Ok(reply)
    }

    /// Clear a sender's history.
    pub async fn clear(&self, sender: &SenderId) -> Result<(), StorageError> {
        self.store.clear(sender).await
    }

    /// The model the next request will use.
    pub async fn active_model(&self) -> String {
        self.store.active_model(&self.default_model).await
    }

    /// Switch the model for all subsequent requests, across all senders.
    pub async fn set_active_model(&self, model: &str) -> Result<(), StorageError> {
        self.store.set_active_model(model).await
    }

    /// Name of the storage backend, for status reports.
    pub fn storage_name(&self) -> &str {
        self.store.backend_name()
    }
}
