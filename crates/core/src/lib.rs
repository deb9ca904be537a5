//! # meshmind Core
//!
//! Domain types, traits, and error definitions for the meshmind assistant
//! bot. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every subsystem the bot relies on but does not own — persistence, the
//! inference endpoint, the mesh transport — is defined as a trait here.
//! Implementations live in their respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod command;
pub mod error;
pub mod inference;
pub mod message;
pub mod storage;
pub mod transport;

// Re-export key types at crate root for ergonomics
pub use command::{Command, CommandContext, CommandRegistry, CommandRouter};
pub use error::{Error, InferenceError, Result, StorageError, TransportError};
pub use inference::InferenceClient;
pub use message::{History, Message, Role};
pub use storage::KvStore;
pub use transport::{InboundMessage, SenderId, Transport};
