//! `meshmind run` — Start the bot on the console transport.

use crate::console::ConsoleTransport;
use meshmind_config::AppConfig;
use meshmind_conversation::ChatEngine;
use meshmind_core::command::CommandRouter;
use meshmind_core::inference::InferenceClient;
use meshmind_core::transport::Transport;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let store = meshmind_storage::build_store(&config.storage)
        .await
        .map_err(|e| format!("Failed to open storage: {e}"))?;
    let client: Arc<dyn InferenceClient> =
        Arc::new(meshmind_inference::build_client(&config.ollama));

    let engine = ChatEngine::new(
        store,
        client.clone(),
        &config.system_prompt,
        &config.ollama.default_model,
        config.max_history,
    );
    let registry = meshmind_commands::default_registry(
        engine,
        client.clone(),
        &config.ollama.url,
        config.storage.path.clone(),
    );
    let router = Arc::new(CommandRouter::new(registry, config.admin_senders()));

    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║        meshmind — Mesh AI Assistant          ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Bot name:  {}", config.bot_name);
    println!("  Ollama:    {}", config.ollama.url);
    println!("  Model:     {}", config.ollama.default_model);
    println!("  Storage:   {}", config.storage.backend);
    println!("  Admins:    {}", config.admin.senders.len());
    println!();

    match client.health_check().await {
        Ok(true) => println!("  ✅ Ollama is reachable"),
        _ => {
            println!("  ⚠️  Ollama is not responding at {}", config.ollama.url);
            println!("     Asks will fail until it comes up (ollama serve)");
        }
    }
    println!();
    println!("  Type /help for commands. Type 'exit' to quit.");
    println!();

    let transport = Arc::new(ConsoleTransport::new(&config.bot_name));
    let mut inbound = transport
        .start()
        .await
        .map_err(|e| format!("Transport error: {e}"))?;

    info!(
        transport = transport.name(),
        commands = router.registry().len(),
        "meshmind online"
    );

    // One task per message: a slow inference call must not block
    // other senders.
    while let Some(msg) = inbound.recv().await {
        let router = router.clone();
        let transport = transport.clone();
        tokio::spawn(async move {
            let reply = router.dispatch(&msg.sender, &msg.content).await;
            if let Err(e) = transport.send(&msg.sender, &reply).await {
                warn!(recipient = %msg.sender, error = %e, "Reply delivery failed");
            }
        });
    }

    transport.stop().await.ok();
    info!("meshmind shutting down");
    println!();
    println!("  Goodbye! 👋");
    println!();

    Ok(())
}
