//! Console transport — interactive terminal chat for local use.
//!
//! This is the simplest transport: reads lines from stdin, prints replies
//! to stdout. Every line arrives as the fixed sender `local_user`, so the
//! console behaves like a single mesh peer talking to the bot.

use async_trait::async_trait;
use meshmind_core::error::TransportError;
use meshmind_core::transport::{InboundMessage, SenderId, Transport};
use std::io::Write;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Sender id assigned to the local terminal user.
pub const LOCAL_SENDER: &str = "local_user";

/// Interactive console transport.
pub struct ConsoleTransport {
    label: String,
}

impl ConsoleTransport {
    /// `label` prefixes reply lines, normally the configured bot name.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    fn prompt() {
        print!("  You > ");
        let _ = std::io::stdout().flush();
    }
}

#[async_trait]
impl Transport for ConsoleTransport {
    fn name(&self) -> &str {
        "console"
    }

    async fn start(&self) -> Result<mpsc::Receiver<InboundMessage>, TransportError> {
        let (tx, rx) = mpsc::channel(32);

        Self::prompt();
        tokio::spawn(async move {
            let stdin = io::stdin();
            let reader = BufReader::new(stdin);
            let mut lines = reader.lines();

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let line = line.trim().to_string();
                        if line.is_empty() {
                            Self::prompt();
                            continue;
                        }

                        // Check for exit commands
                        if matches!(line.as_str(), "exit" | "quit" | "/exit" | "/quit" | ":q") {
                            break;
                        }

                        let msg = InboundMessage {
                            sender: SenderId::new(LOCAL_SENDER),
                            content: line,
                        };

                        if tx.send(msg).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => break, // EOF (Ctrl+D)
                    Err(_) => break,
                }
            }
        });

        Ok(rx)
    }

    async fn send(&self, _recipient: &SenderId, content: &str) -> Result<(), TransportError> {
        println!();
        for line in content.lines() {
            println!("  {} > {line}", self.label);
        }
        println!();
        Self::prompt();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_transport_properties() {
        let transport = ConsoleTransport::new("meshmind");
        assert_eq!(transport.name(), "console");
        assert_eq!(LOCAL_SENDER, "local_user");
    }

    #[tokio::test]
    async fn send_never_fails() {
        let transport = ConsoleTransport::new("meshmind");
        let result = transport
            .send(&SenderId::new(LOCAL_SENDER), "line one\nline two")
            .await;
        assert!(result.is_ok());
    }
}
