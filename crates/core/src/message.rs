//! Message and history domain types.
//!
//! These are the value objects that flow through the whole bot: the transport
//! delivers a user's text, the engine folds it into a `History`, and the
//! history (plus the system prompt) becomes the message list submitted to the
//! inference endpoint. The serialized form is the exact wire format the chat
//! API consumes: a JSON array of `{"role", "content"}` objects.

use serde::{Deserialize, Serialize};

/// The role of a message author in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Behavioral instructions, prepended per request and never persisted
    System,
    /// The end user on the mesh
    User,
    /// The model's reply
    Assistant,
}

/// A single chat message. The two fields are the entire wire encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// An ordered per-user conversation history, oldest message first.
///
/// Serializes as a bare JSON array, so the persisted blob is exactly the
/// message list the chat API expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<Message>);

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) {
        self.0.push(message);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The retained messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.0
    }

    /// Drop the oldest messages until at most `2 * max_turns` remain.
    ///
    /// A turn is one user message plus one assistant reply, so the bound is
    /// expressed in messages. Shorter histories are left untouched.
    pub fn truncate_to_turns(&mut self, max_turns: usize) {
        let keep = max_turns.saturating_mul(2);
        if self.0.len() > keep {
            self.0.drain(..self.0.len() - keep);
        }
    }
}

impl From<Vec<Message>> for History {
    fn from(messages: Vec<Message>) -> Self {
        Self(messages)
    }
}
