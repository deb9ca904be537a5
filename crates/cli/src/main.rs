//! meshmind CLI — the main entry point.
//!
//! Commands:
//! - `onboard` — Initialize config & data directory
//! - `run`     — Start the bot on the console transport
//! - `status`  — Show configuration and service health
//! - `models`  — List models on the inference endpoint

use clap::{Parser, Subcommand};

mod commands;
mod console;

#[derive(Parser)]
#[command(
    name = "meshmind",
    about = "meshmind — LLM assistant bot for mesh networks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration and data directory
    Onboard,

    /// Start the bot and answer messages until EOF or 'exit'
    Run,

    /// Show configuration and service health
    Status,

    /// List models available on the inference endpoint
    Models,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Run => commands::run::run().await?,
        Commands::Status => commands::status::run().await?,
        Commands::Models => commands::models::run().await?,
    }

    Ok(())
}
