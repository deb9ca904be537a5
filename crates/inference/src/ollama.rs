//! Ollama client implementation.
//!
//! Talks to Ollama's native HTTP API:
//! - `POST /api/chat` for complete (non-streaming) replies
//! - `GET /api/tags` for model listing and health probes
//!
//! The chat timeout is long by default because Ollama loads a model into
//! memory on first use; list and health probes use short per-request
//! timeouts so admin commands answer quickly.

use async_trait::async_trait;
use meshmind_core::InferenceClient;
use meshmind_core::error::InferenceError;
use meshmind_core::message::Message;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const LIST_TIMEOUT: Duration = Duration::from_secs(10);
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// A client for a local Ollama server.
pub struct OllamaClient {
    base_url: String,
    chat_timeout: Duration,
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: impl Into<String>, chat_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(chat_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            chat_timeout,
            client,
        }
    }

    /// Create a client for a default local install (convenience constructor).
    pub fn local() -> Self {
        Self::new("http://localhost:11434", Duration::from_secs(120))
    }

    /// The endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.base_url
    }

    /// Map a reqwest transport failure onto the error taxonomy.
    fn map_request_error(&self, e: reqwest::Error) -> InferenceError {
        if e.is_timeout() {
            InferenceError::Timeout(format!(
                "no reply from {} within {}s",
                self.base_url,
                self.chat_timeout.as_secs()
            ))
        } else if e.is_connect() {
            InferenceError::Unreachable(self.base_url.clone())
        } else {
            InferenceError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn chat(
        &self,
        model: &str,
        messages: &[Message],
    ) -> std::result::Result<String, InferenceError> {
        let url = format!("{}/api/chat", self.base_url);
        let body = ChatRequest {
            model,
            messages,
            stream: false,
        };

        debug!(endpoint = %self.base_url, model = %model, count = messages.len(), "Sending chat request");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status().as_u16();
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Ollama returned error");
            return Err(InferenceError::Api {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::Decode(e.to_string()))?;

        Ok(api_response.message.content)
    }

    async fn list_models(&self) -> std::result::Result<Vec<String>, InferenceError> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(LIST_TIMEOUT)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status().as_u16();
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api {
                status_code: status,
                message: error_body,
            });
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::Decode(e.to_string()))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    async fn health_check(&self) -> std::result::Result<bool, InferenceError> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        Ok(response.status().is_success())
    }
}

// --- Ollama API types (internal) ---

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagModel>,
}

#[derive(Debug, Deserialize)]
struct TagModel {
    name: String,
}
