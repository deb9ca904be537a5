//! Setmodel command — switch the active model for every user at once.

use async_trait::async_trait;
use meshmind_conversation::ChatEngine;
use meshmind_core::command::{Command, CommandContext};
use meshmind_core::error::Result;
use tracing::info;

pub struct SetModelCommand {
    engine: ChatEngine,
}

impl SetModelCommand {
    pub fn new(engine: ChatEngine) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Command for SetModelCommand {
    fn name(&self) -> &str {
        "setmodel"
    }

    fn description(&self) -> &str {
        "[Admin] Switch the active Ollama model for all users."
    }

    fn admin_only(&self) -> bool {
        true
    }

    async fn handle(&self, ctx: CommandContext) -> Result<String> {
        if ctx.args.is_empty() {
            return Ok("Usage: /setmodel <model_name>".to_string());
        }

        self.engine.set_active_model(&ctx.args).await?;
        info!(sender = %ctx.sender, model = %ctx.args, "Active model switched");
        Ok(format!("Active model switched to: {}", ctx.args))
    }
}
