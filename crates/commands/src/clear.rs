//! Clear command — wipe the sender's own conversation history.

use async_trait::async_trait;
use meshmind_conversation::ChatEngine;
use meshmind_core::command::{Command, CommandContext};
use meshmind_core::error::Result;

pub struct ClearCommand {
    engine: ChatEngine,
}

impl ClearCommand {
    pub fn new(engine: ChatEngine) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &str {
        "clear"
    }

    fn description(&self) -> &str {
        "Clear your conversation history with the bot."
    }

    async fn handle(&self, ctx: CommandContext) -> Result<String> {
        self.engine.clear(&ctx.sender).await?;
        Ok("Conversation history cleared.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshmind_core::error::InferenceError;
    use meshmind_core::message::Message;
    use meshmind_core::storage::KvStore;
    use meshmind_core::transport::SenderId;
    use meshmind_storage::MemoryStore;
    use std::sync::Arc;

    /// Never called in these tests; clearing must not touch inference.
    struct UnusedClient;

    #[async_trait]
    impl meshmind_core::inference::InferenceClient for UnusedClient {
        fn name(&self) -> &str {
            "unused"
        }

        async fn chat(
            &self,
            _model: &str,
            _messages: &[Message],
        ) -> std::result::Result<String, InferenceError> {
            panic!("inference must not be called");
        }
    }

    #[tokio::test]
    async fn clear_confirms_and_empties_history() {
        let kv = MemoryStore::new();
        kv.set("history_!a1b2c3d4", r#"[{"role":"user","content":"hi"}]"#)
            .await
            .unwrap();

        let engine = ChatEngine::new(
            Arc::new(kv.clone()),
            Arc::new(UnusedClient),
            "prompt",
            "llama3.2",
            10,
        );
        let cmd = ClearCommand::new(engine);

        let reply = cmd
            .handle(CommandContext {
                sender: SenderId::new("!a1b2c3d4"),
                args: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(reply, "Conversation history cleared.");
        assert_eq!(
            kv.get("history_!a1b2c3d4").await.unwrap().as_deref(),
            Some("[]")
        );
    }
}
