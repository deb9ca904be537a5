//! Models command — list what the Ollama instance has pulled.

use async_trait::async_trait;
use meshmind_core::command::{Command, CommandContext};
use meshmind_core::error::{InferenceError, Result};
use meshmind_core::inference::InferenceClient;
use std::sync::Arc;

pub struct ListModelsCommand {
    client: Arc<dyn InferenceClient>,
    ollama_url: String,
}

impl ListModelsCommand {
    pub fn new(client: Arc<dyn InferenceClient>, ollama_url: impl Into<String>) -> Self {
        Self {
            client,
            ollama_url: ollama_url.into(),
        }
    }
}

#[async_trait]
impl Command for ListModelsCommand {
    fn name(&self) -> &str {
        "models"
    }

    fn description(&self) -> &str {
        "[Admin] List all models available on the Ollama instance."
    }

    fn admin_only(&self) -> bool {
        true
    }

    async fn handle(&self, _ctx: CommandContext) -> Result<String> {
        match self.client.list_models().await {
            Ok(models) if models.is_empty() => {
                Ok("No models found. Pull one with: ollama pull llama3.2".to_string())
            }
            Ok(models) => {
                let names: Vec<String> = models.iter().map(|m| format!("  - {m}")).collect();
                Ok(format!("Available models:\n{}", names.join("\n")))
            }
            Err(InferenceError::Unreachable(_)) => Ok(format!(
                "Error: Cannot reach Ollama at {}",
                self.ollama_url
            )),
            Err(e) => Ok(format!("Error fetching models: {e}")),
        }
    }
}
