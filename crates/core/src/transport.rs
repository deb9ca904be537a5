//! Transport trait — the seam between the bot core and the mesh stack.
//!
//! A Transport delivers inbound text from mesh users and carries plain-text
//! replies back. Routing, addressing, link crypto, and announce logic all
//! live on the far side of this trait; the core only ever sees an opaque
//! sender hash and a line of text. The shipped implementation is a console
//! transport for local use.

use crate::error::TransportError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a mesh user (the transport's sender hash).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SenderId(pub String);

impl SenderId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SenderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SenderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A message received from the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Who sent it
    pub sender: SenderId,

    /// The raw command text (e.g. `/ask what is LoRa?`)
    pub content: String,
}

/// The core Transport trait.
///
/// Implementations handle the platform-specific receive loop and delivery;
/// the bot's run loop only consumes the receiver and calls `send`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Human-readable transport name (e.g., "console", "lxmf").
    fn name(&self) -> &str;

    /// Start listening for inbound messages.
    ///
    /// Returns a receiver that yields messages as they arrive. The
    /// implementation owns its reader task; dropping the receiver stops
    /// consumption but not delivery of already-queued messages.
    async fn start(
        &self,
    ) -> std::result::Result<tokio::sync::mpsc::Receiver<InboundMessage>, TransportError>;

    /// Deliver a reply to a sender.
    async fn send(
        &self,
        recipient: &SenderId,
        content: &str,
    ) -> std::result::Result<(), TransportError>;

    /// Stop the transport gracefully.
    async fn stop(&self) -> std::result::Result<(), TransportError> {
        Ok(())
    }
}
