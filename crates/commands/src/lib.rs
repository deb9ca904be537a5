//! Built-in command implementations for meshmind.
//!
//! Commands are the bot's entire user surface: everyday commands (ask,
//! clear, model, help) plus the admin set (setmodel, models, status,
//! clearall). Each handler owns the service handles it needs and returns
//! plain text sized for a mesh link.

pub mod ask;
pub mod clear;
pub mod clear_all;
pub mod help;
pub mod list_models;
pub mod model;
pub mod set_model;
pub mod status;

pub use ask::AskCommand;
pub use clear::ClearCommand;
pub use clear_all::ClearAllCommand;
pub use help::HelpCommand;
pub use list_models::ListModelsCommand;
pub use model::ModelCommand;
pub use set_model::SetModelCommand;
pub use status::StatusCommand;

use meshmind_conversation::ChatEngine;
use meshmind_core::command::CommandRegistry;
use meshmind_core::inference::InferenceClient;
use std::path::PathBuf;
use std::sync::Arc;

/// Create the default command registry with all built-in commands.
///
/// `ollama_url` appears verbatim in user-facing error and status text;
/// `data_dir` is quoted in the clearall wipe instructions.
pub fn default_registry(
    engine: ChatEngine,
    client: Arc<dyn InferenceClient>,
    ollama_url: &str,
    data_dir: PathBuf,
) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(AskCommand::new(engine.clone(), ollama_url)));
    registry.register(Box::new(ClearCommand::new(engine.clone())));
    registry.register(Box::new(ModelCommand::new(engine.clone())));
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(SetModelCommand::new(engine.clone())));
    registry.register(Box::new(ListModelsCommand::new(client.clone(), ollama_url)));
    registry.register(Box::new(StatusCommand::new(engine, client, ollama_url)));
    registry.register(Box::new(ClearAllCommand::new(data_dir)));
    registry
}
