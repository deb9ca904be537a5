//! Command trait and dispatch — the bot's inbound surface.
//!
//! Everything a mesh user can do is a Command: ask, clear, model, help,
//! plus the admin set. Commands live in an explicit table built at startup
//! (no dynamic discovery) and are invoked with the sender's id and the
//! argument text. Dispatch always produces a plain-text reply: unknown
//! names, refused admin calls, and handler failures are all rendered as
//! messages, never raised.

use crate::error::Result;
use crate::transport::SenderId;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, warn};

/// The invocation context handed to a command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Who invoked the command
    pub sender: SenderId,

    /// Everything after the command name, trimmed
    pub args: String,
}

/// The core Command trait.
///
/// Each handler (ask, clear, model, setmodel, ...) implements this trait
/// and owns the service handles it needs. Handlers return their reply
/// text; the router turns errors into `Error: ...` replies.
#[async_trait]
pub trait Command: Send + Sync {
    /// The name users type (e.g., "ask", "setmodel").
    fn name(&self) -> &str;

    /// One-line description shown in the help listing.
    fn description(&self) -> &str;

    /// Whether the sender must be on the admin roster.
    fn admin_only(&self) -> bool {
        false
    }

    /// Run the command and produce the reply text.
    async fn handle(&self, ctx: CommandContext) -> Result<String>;
}

/// A registry of available commands.
///
/// A plain name → handler table; the router performs lookup, admin
/// gating, and error rendering on top of it.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, command: Box<dyn Command>) {
        let name = command.name().to_string();
        self.commands.insert(name, command);
    }

    /// Get a command by name.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// List all registered command names.
    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Routes inbound text to commands and guarantees a reply for every input.
pub struct CommandRouter {
    registry: CommandRegistry,
    admins: Vec<SenderId>,
}

impl CommandRouter {
    pub fn new(registry: CommandRegistry, admins: Vec<SenderId>) -> Self {
        Self { registry, admins }
    }

    /// Whether a sender is on the admin roster. An empty roster grants no one.
    pub fn is_admin(&self, sender: &SenderId) -> bool {
        self.admins.contains(sender)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Parse a raw inbound line (`/name args` — the slash is optional) and
    /// run the matching command. Every path returns a reply string.
    pub async fn dispatch(&self, sender: &SenderId, line: &str) -> String {
        let line = line.trim();
        let body = line.strip_prefix('/').unwrap_or(line);
        if body.is_empty() {
            return "Send /help for the command list.".to_string();
        }

        let (name, args) = match body.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (body, ""),
        };

        let Some(command) = self.registry.get(name) else {
            debug!(%sender, command = name, "Unknown command");
            return format!("Unknown command: {name}. Send /help for the command list.");
        };

        if command.admin_only() && !self.is_admin(sender) {
            warn!(%sender, command = name, "Refused admin command");
            return "Permission denied. This command requires admin access.".to_string();
        }

        debug!(%sender, command = name, args_len = args.len(), "Dispatching command");
        let ctx = CommandContext {
            sender: sender.clone(),
            args: args.to_string(),
        };
        match command.handle(ctx).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(%sender, command = name, error = %e, "Command failed");
                format!("Error: {e}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// A simple test command for unit tests.
    struct PingCommand;

    #[async_trait]
    impl Command for PingCommand {
        fn name(&self) -> &str {
            "ping"
        }
        fn description(&self) -> &str {
            "Replies with pong"
        }
        async fn handle(&self, ctx: CommandContext) -> Result<String> {
            if ctx.args.is_empty() {
                Ok("pong".to_string())
            } else {
                Ok(format!("pong: {}", ctx.args))
            }
        }
    }

    struct WipeCommand;

    #[async_trait]
    impl Command for WipeCommand {
        fn name(&self) -> &str {
            "wipe"
        }
        fn description(&self) -> &str {
            "Admin-only wipe"
        }
        fn admin_only(&self) -> bool {
            true
        }
        async fn handle(&self, _ctx: CommandContext) -> Result<String> {
            Ok("wiped".to_string())
        }
    }

    struct FailingCommand;

    #[async_trait]
    impl Command for FailingCommand {
        fn name(&self) -> &str {
            "explode"
        }
        fn description(&self) -> &str {
            "Always fails"
        }
        async fn handle(&self, _ctx: CommandContext) -> Result<String> {
            Err(Error::Internal("wires crossed".into()))
        }
    }

    fn router_with(commands: Vec<Box<dyn Command>>, admins: Vec<SenderId>) -> CommandRouter {
        let mut registry = CommandRegistry::new();
        for command in commands {
            registry.register(command);
        }
        CommandRouter::new(registry, admins)
    }

    #[test]
    fn registry_register_and_lookup() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(PingCommand));
        assert!(registry.get("ping").is_some());
        assert!(registry.get("nonexistent").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn dispatch_strips_slash_and_splits_args() {
        let router = router_with(vec![Box::new(PingCommand)], vec![]);
        let sender = SenderId::new("user1");

        assert_eq!(router.dispatch(&sender, "/ping").await, "pong");
        assert_eq!(router.dispatch(&sender, "ping").await, "pong");
        assert_eq!(
            router.dispatch(&sender, "/ping   hello  ").await,
            "pong: hello"
        );
    }

    #[tokio::test]
    async fn dispatch_unknown_command_replies_with_hint() {
        let router = router_with(vec![], vec![]);
        let reply = router
            .dispatch(&SenderId::new("user1"), "/frobnicate now")
            .await;
        assert!(reply.contains("Unknown command: frobnicate"));
        assert!(reply.contains("/help"));
    }

    #[tokio::test]
    async fn dispatch_empty_input_replies_with_hint() {
        let router = router_with(vec![Box::new(PingCommand)], vec![]);
        let reply = router.dispatch(&SenderId::new("user1"), "   ").await;
        assert!(reply.contains("/help"));
    }

    #[tokio::test]
    async fn admin_command_refused_for_unknown_sender() {
        let router = router_with(
            vec![Box::new(WipeCommand)],
            vec![SenderId::new("admin_hash")],
        );
        let reply = router.dispatch(&SenderId::new("rando"), "/wipe").await;
        assert_eq!(reply, "Permission denied. This command requires admin access.");
    }

    #[tokio::test]
    async fn admin_command_allowed_for_roster_member() {
        let router = router_with(
            vec![Box::new(WipeCommand)],
            vec![SenderId::new("admin_hash")],
        );
        let reply = router.dispatch(&SenderId::new("admin_hash"), "/wipe").await;
        assert_eq!(reply, "wiped");
    }

    #[tokio::test]
    async fn empty_admin_roster_grants_no_one() {
        let router = router_with(vec![Box::new(WipeCommand)], vec![]);
        let reply = router.dispatch(&SenderId::new("anyone"), "/wipe").await;
        assert!(reply.starts_with("Permission denied"));
    }

    #[tokio::test]
    async fn handler_errors_render_as_replies() {
        let router = router_with(vec![Box::new(FailingCommand)], vec![]);
        let reply = router.dispatch(&SenderId::new("user1"), "/explode").await;
        assert!(reply.starts_with("Error: "));
        assert!(reply.contains("wires crossed"));
    }
}
