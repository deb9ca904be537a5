//! `meshmind status` — Show configuration and service health.

use meshmind_config::AppConfig;
use meshmind_core::inference::InferenceClient;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    println!("🕸️  meshmind Status");
    println!("=================");
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  Bot name:     {}", config.bot_name);
    println!("  Ollama URL:   {}", config.ollama.url);
    println!("  Model:        {}", config.ollama.default_model);
    println!("  Max history:  {} turns", config.max_history);
    println!("  Storage:      {}", config.storage.backend);
    println!("  Data dir:     {}", config.storage.path.display());
    println!("  Admins:       {}", config.admin.senders.len());

    let client = meshmind_inference::build_client(&config.ollama);
    match client.health_check().await {
        Ok(true) => println!("\n  ✅ Ollama is reachable"),
        _ => println!("\n  ⚠️  Ollama is not responding — run `ollama serve`"),
    }

    // Check config file existence
    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("  ✅ Config file found");
    } else {
        println!("  ⚠️  No config file — run `meshmind onboard` first");
    }

    Ok(())
}
