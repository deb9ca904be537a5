//! Model command — show which model answers the next ask.

use async_trait::async_trait;
use meshmind_conversation::ChatEngine;
use meshmind_core::command::{Command, CommandContext};
use meshmind_core::error::Result;

pub struct ModelCommand {
    engine: ChatEngine,
}

impl ModelCommand {
    pub fn new(engine: ChatEngine) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Command for ModelCommand {
    fn name(&self) -> &str {
        "model"
    }

    fn description(&self) -> &str {
        "Show the currently active LLM model."
    }

    async fn handle(&self, _ctx: CommandContext) -> Result<String> {
        let model = self.engine.active_model().await;
        Ok(format!("Active model: {model}"))
    }
}
