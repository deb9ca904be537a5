//! Configuration loading, validation, and management for meshmind.
//!
//! Loads configuration from `~/.meshmind/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use meshmind_core::SenderId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.meshmind/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bot name shown in status reports
    #[serde(default = "default_bot_name")]
    pub bot_name: String,

    /// System prompt prepended to every inference request (never persisted)
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Conversation turns retained per user; each turn is two messages
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Ollama endpoint configuration
    #[serde(default)]
    pub ollama: OllamaConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Admin configuration
    #[serde(default)]
    pub admin: AdminConfig,
}

fn default_bot_name() -> String {
    "meshmind".into()
}

fn default_system_prompt() -> String {
    "You are a helpful AI assistant reachable over a low-bandwidth mesh network. \
     Keep responses concise and clear. Avoid unnecessary formatting -- plain text \
     works best over mesh links."
        .into()
}

fn default_max_history() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server
    #[serde(default = "default_ollama_url")]
    pub url: String,

    /// Model used when no store-backed selection exists
    #[serde(default = "default_ollama_model")]
    pub default_model: String,

    /// Chat request timeout. Generous on purpose: first use of a model can
    /// block while Ollama loads it into memory.
    #[serde(default = "default_chat_timeout_secs")]
    pub chat_timeout_secs: u64,
}

fn default_ollama_url() -> String {
    "http://localhost:11434".into()
}

fn default_ollama_model() -> String {
    "llama3.2".into()
}

fn default_chat_timeout_secs() -> u64 {
    120
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: default_ollama_url(),
            default_model: default_ollama_model(),
            chat_timeout_secs: default_chat_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend to use: "sqlite", "file", or "memory"
    #[serde(default = "default_storage_backend")]
    pub backend: String,

    /// Directory holding the backend's data files
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_backend() -> String {
    "sqlite".into()
}

fn default_storage_path() -> PathBuf {
    AppConfig::config_dir().join("data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            path: default_storage_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Sender hashes granted admin commands. Empty = no admins.
    #[serde(default)]
    pub senders: Vec<String>,
}

impl AppConfig {
    /// Load configuration from the default path (~/.meshmind/config.toml).
    ///
    /// Environment variables override the file:
    /// - `BOT_NAME` — display name
    /// - `OLLAMA_URL` — inference endpoint
    /// - `OLLAMA_MODEL` — default model
    /// - `MESHMIND_SYSTEM_PROMPT` — system prompt
    /// - `MESHMIND_ADMINS` — comma-separated admin sender hashes
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = Self::config_dir();
        let config_path = config_dir.join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Ok(name) = std::env::var("BOT_NAME") {
            config.bot_name = name;
        }

        if let Ok(url) = std::env::var("OLLAMA_URL") {
            config.ollama.url = url;
        }

        if let Ok(model) = std::env::var("OLLAMA_MODEL") {
            config.ollama.default_model = model;
        }

        if let Ok(prompt) = std::env::var("MESHMIND_SYSTEM_PROMPT") {
            config.system_prompt = prompt;
        }

        if let Ok(admins) = std::env::var("MESHMIND_ADMINS") {
            config.admin.senders = admins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".meshmind")
    }

    /// The admin roster as sender ids, ready for the command router.
    pub fn admin_senders(&self) -> Vec<SenderId> {
        self.admin
            .senders
            .iter()
            .map(|s| SenderId::new(s.clone()))
            .collect()
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history == 0 {
            return Err(ConfigError::ValidationError(
                "max_history must be at least 1 turn".into(),
            ));
        }

        if self.ollama.chat_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "ollama.chat_timeout_secs must be at least 1".into(),
            ));
        }

        if self.ollama.url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "ollama.url must not be empty".into(),
            ));
        }

        match self.storage.backend.as_str() {
            "sqlite" | "file" | "memory" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "unknown storage backend '{other}' (expected sqlite, file, or memory)"
                )));
            }
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            system_prompt: default_system_prompt(),
            max_history: default_max_history(),
            ollama: OllamaConfig::default(),
            storage: StorageConfig::default(),
            admin: AdminConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
