//! Clearall command — operator instructions for a full history wipe.
//!
//! The store interface is a plain get/set and deliberately cannot
//! enumerate keys, so a remote wipe-everything is not offered. The
//! command instead tells the operator how to do it on the host.

use async_trait::async_trait;
use meshmind_core::command::{Command, CommandContext};
use meshmind_core::error::Result;
use std::path::PathBuf;

pub struct ClearAllCommand {
    data_dir: PathBuf,
}

impl ClearAllCommand {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

#[async_trait]
impl Command for ClearAllCommand {
    fn name(&self) -> &str {
        "clearall"
    }

    fn description(&self) -> &str {
        "[Admin] Instructions for wiping all user conversation history."
    }

    fn admin_only(&self) -> bool {
        true
    }

    async fn handle(&self, _ctx: CommandContext) -> Result<String> {
        Ok(format!(
            "To wipe all user history: stop the bot, delete the {} directory, then restart.",
            self.data_dir.display()
        ))
    }
}
