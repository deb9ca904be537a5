//! meshmind-conversation — per-user history and the ask pipeline.
//!
//! [`ConversationStore`] maps senders to their stored histories and holds
//! the shared active-model setting. [`ChatEngine`] sits on top of it and
//! runs the full turn: load history, append the prompt, call the model,
//! persist the outcome.

pub mod engine;
pub mod store;

pub use engine::ChatEngine;
pub use store::ConversationStore;
