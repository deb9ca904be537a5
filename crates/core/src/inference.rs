//! Inference client trait — the abstraction over the local LLM endpoint.
//!
//! The bot composes a message list (system prompt + history) and asks the
//! client for one complete reply. Streaming is deliberately absent: replies
//! travel back over a low-bandwidth mesh link as single messages, so
//! token-by-token delivery has nothing to attach to.

use crate::error::InferenceError;
use crate::message::Message;
use async_trait::async_trait;

/// The core InferenceClient trait.
///
/// The shipped implementation talks to an Ollama server over HTTP; tests
/// substitute scripted clients.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// A human-readable name for this client (e.g., "ollama").
    fn name(&self) -> &str;

    /// Submit a full message list and return the model's reply text.
    async fn chat(
        &self,
        model: &str,
        messages: &[Message],
    ) -> std::result::Result<String, InferenceError>;

    /// List model names available at the endpoint.
    async fn list_models(&self) -> std::result::Result<Vec<String>, InferenceError> {
        Ok(Vec::new())
    }

    /// Health check — can we reach the endpoint?
    async fn health_check(&self) -> std::result::Result<bool, InferenceError> {
        Ok(true)
    }
}
