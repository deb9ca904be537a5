//! Status command — one-glance health report for operators.

use async_trait::async_trait;
use meshmind_conversation::ChatEngine;
use meshmind_core::command::{Command, CommandContext};
use meshmind_core::error::Result;
use meshmind_core::inference::InferenceClient;
use std::sync::Arc;

pub struct StatusCommand {
    engine: ChatEngine,
    client: Arc<dyn InferenceClient>,
    ollama_url: String,
}

impl StatusCommand {
    pub fn new(
        engine: ChatEngine,
        client: Arc<dyn InferenceClient>,
        ollama_url: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            client,
            ollama_url: ollama_url.into(),
        }
    }
}

#[async_trait]
impl Command for StatusCommand {
    fn name(&self) -> &str {
        "status"
    }

    fn description(&self) -> &str {
        "[Admin] Check bot and Ollama service health."
    }

    fn admin_only(&self) -> bool {
        true
    }

    async fn handle(&self, _ctx: CommandContext) -> Result<String> {
        let ollama_status = match self.client.health_check().await {
            Ok(true) => "online",
            Ok(false) | Err(_) => "offline",
        };
        let model = self.engine.active_model().await;

        Ok(format!(
            "Status report:\n\
             \x20 Bot:          online\n\
             \x20 Ollama:       {ollama_status}\n\
             \x20 Ollama URL:   {url}\n\
             \x20 Active model: {model}\n\
             \x20 Storage:      {storage}",
            url = self.ollama_url,
            storage = self.engine.storage_name(),
        ))
    }
}
