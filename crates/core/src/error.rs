//! Error types for the meshmind domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.
//!
//! Nothing here is ever shown raw to a mesh user: the command layer turns
//! every failure into a plain-text reply before it leaves the bot.

use thiserror::Error;

/// The top-level error type for all meshmind operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Storage errors ---
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    // --- Inference errors ---
    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),

    // --- Transport errors ---
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Backend failure: {0}")]
    Backend(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Could not encode value for storage: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Error)]
pub enum InferenceError {
    #[error("API request failed: {message} (status: {status_code})")]
    Api { status_code: u16, message: String },

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("Could not decode response: {0}")]
    Decode(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Delivery failed to {recipient}: {reason}")]
    DeliveryFailed { recipient: String, reason: String },

    #[error("Transport closed: {0}")]
    Closed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_error_displays_status() {
        let err = Error::Inference(InferenceError::Api {
            status_code: 404,
            message: "model 'mistral' not found".into(),
        });
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("mistral"));
    }

    #[test]
    fn unreachable_error_names_endpoint() {
        let err = InferenceError::Unreachable("http://localhost:11434".into());
        assert!(err.to_string().contains("http://localhost:11434"));
    }

    #[test]
    fn storage_error_converts_to_top_level() {
        let err: Error = StorageError::Backend("disk full".into()).into();
        assert!(err.to_string().contains("Storage error"));
        assert!(err.to_string().contains("disk full"));
    }
}
