//! Help command — the static command listing sent to mesh users.
//!
//! Admin commands are deliberately left out; admins know what they have.

use async_trait::async_trait;
use meshmind_core::command::{Command, CommandContext};
use meshmind_core::error::Result;

const HELP_TEXT: &str = "Commands:\n\
    \x20 /ask <question>  - Ask the AI\n\
    \x20 /clear           - Clear conversation history\n\
    \x20 /model           - Show active model\n\
    \x20 /help            - Show this message";

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "Show available commands."
    }

    async fn handle(&self, _ctx: CommandContext) -> Result<String> {
        Ok(HELP_TEXT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshmind_core::transport::SenderId;

    #[tokio::test]
    async fn lists_the_user_commands() {
        let reply = HelpCommand
            .handle(CommandContext {
                sender: SenderId::new("anyone"),
                args: String::new(),
            })
            .await
            .unwrap();

        assert!(reply.starts_with("Commands:\n"));
        for name in ["/ask", "/clear", "/model", "/help"] {
            assert!(reply.contains(name), "missing {name} in help text");
        }
        // Admin commands stay unadvertised.
        assert!(!reply.contains("setmodel"));
    }

    #[tokio::test]
    async fn help_lines_are_aligned() {
        let reply = HelpCommand
            .handle(CommandContext {
                sender: SenderId::new("anyone"),
                args: String::new(),
            })
            .await
            .unwrap();

        let dash_columns: Vec<usize> = reply
            .lines()
            .skip(1)
            .map(|line| line.find(" - ").unwrap())
            .collect();
        assert!(dash_columns.windows(2).all(|w| w[0] == w[1]));
    }
}
