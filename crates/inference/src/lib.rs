//! Inference client implementations for meshmind.
//!
//! The client implements the `meshmind_core::InferenceClient` trait;
//! `build_client` wires it up from configuration.

pub mod ollama;

pub use ollama::OllamaClient;

use meshmind_config::OllamaConfig;
use std::time::Duration;

/// Build the Ollama client from configuration.
pub fn build_client(config: &OllamaConfig) -> OllamaClient {
    OllamaClient::new(
        &config.url,
        Duration::from_secs(config.chat_timeout_secs),
    )
}
