//! Ask command — one conversational turn against the active model.
//!
//! The reply is always a user-facing string. Inference failures are
//! rendered here rather than propagated: mesh users see a short plain
//! message, not an error chain.

use async_trait::async_trait;
use meshmind_conversation::ChatEngine;
use meshmind_core::command::{Command, CommandContext};
use meshmind_core::error::{InferenceError, Result};

pub struct AskCommand {
    engine: ChatEngine,
    ollama_url: String,
}

impl AskCommand {
    pub fn new(engine: ChatEngine, ollama_url: impl Into<String>) -> Self {
        Self {
            engine,
            ollama_url: ollama_url.into(),
        }
    }
}

#[async_trait]
impl Command for AskCommand {
    fn name(&self) -> &str {
        "ask"
    }

    fn description(&self) -> &str {
        "Ask the AI a question. Maintains conversation history per user."
    }

    async fn handle(&self, ctx: CommandContext) -> Result<String> {
        if ctx.args.is_empty() {
            return Ok("Usage: /ask <question>".to_string());
        }

        match self.engine.ask(&ctx.sender, &ctx.args).await {
            Ok(reply) => Ok(reply),
            Err(InferenceError::Timeout(_)) => Ok(
                "Error: Ollama timed out. The model may still be loading -- \
                 please wait a moment and try again."
                    .to_string(),
            ),
            Err(InferenceError::Unreachable(_)) => Ok(format!(
                "Error: Cannot reach Ollama. Is it running at {}?",
                self.ollama_url
            )),
            Err(e) => Ok(format!("Error: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshmind_core::message::Message;
    use meshmind_core::storage::KvStore;
    use meshmind_core::transport::SenderId;
    use meshmind_storage::MemoryStore;
    use std::sync::Arc;

    struct FixedClient {
        outcome: std::result::Result<String, InferenceError>,
    }

    impl FixedClient {
        fn replying(text: &str) -> Self {
            Self {
                outcome: Ok(text.to_string()),
            }
        }

        fn failing(error: InferenceError) -> Self {
            Self {
                outcome: Err(error),
            }
        }
    }

    #[async_trait]
    impl meshmind_core::inference::InferenceClient for FixedClient {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn chat(
            &self,
            _model: &str,
            _messages: &[Message],
        ) -> std::result::Result<String, InferenceError> {
            self.outcome.clone()
        }
    }

    fn ctx(args: &str) -> CommandContext {
        CommandContext {
            sender: SenderId::new("!a1b2c3d4"),
            args: args.to_string(),
        }
    }

    fn ask_with(client: FixedClient) -> AskCommand {
        let engine = ChatEngine::new(
            Arc::new(MemoryStore::new()),
            Arc::new(client),
            "prompt",
            "llama3.2",
            10,
        );
        AskCommand::new(engine, "http://localhost:11434")
    }

    #[tokio::test]
    async fn replies_with_model_output() {
        let cmd = ask_with(FixedClient::replying("It depends."));
        let reply = cmd.handle(ctx("what is the meaning of life?")).await.unwrap();
        assert_eq!(reply, "It depends.");
    }

    #[tokio::test]
    async fn empty_prompt_gets_usage_hint() {
        let cmd = ask_with(FixedClient::replying("unused"));
        let reply = cmd.handle(ctx("")).await.unwrap();
        assert_eq!(reply, "Usage: /ask <question>");
    }

    #[tokio::test]
    async fn timeout_renders_the_canned_message() {
        let cmd = ask_with(FixedClient::failing(InferenceError::Timeout(
            "120s elapsed".to_string(),
        )));
        let reply = cmd.handle(ctx("hello?")).await.unwrap();
        assert_eq!(
            reply,
            "Error: Ollama timed out. The model may still be loading -- \
             please wait a moment and try again."
        );
    }

    #[tokio::test]
    async fn unreachable_names_the_endpoint() {
        let cmd = ask_with(FixedClient::failing(InferenceError::Unreachable(
            "connection refused".to_string(),
        )));
        let reply = cmd.handle(ctx("hello?")).await.unwrap();
        assert_eq!(
            reply,
            "Error: Cannot reach Ollama. Is it running at http://localhost:11434?"
        );
    }

    #[tokio::test]
    async fn other_failures_render_as_error_text() {
        let cmd = ask_with(FixedClient::failing(InferenceError::Api {
            status_code: 500,
            message: "model exploded".to_string(),
        }));
        let reply = cmd.handle(ctx("hello?")).await.unwrap();
        assert!(reply.starts_with("Error: "));
        assert!(reply.contains("model exploded"));
    }

    #[tokio::test]
    async fn successful_ask_persists_the_turn() {
        let kv = MemoryStore::new();
        let engine = ChatEngine::new(
            Arc::new(kv.clone()),
            Arc::new(FixedClient::replying("pong")),
            "prompt",
            "llama3.2",
            10,
        );
        let cmd = AskCommand::new(engine, "http://localhost:11434");

        cmd.handle(ctx("ping")).await.unwrap();

        let raw = kv.get("history_!a1b2c3d4").await.unwrap().unwrap();
        let stored: Vec<Message> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.len(), 2);
    }
}
