//! `meshmind models` — List models on the inference endpoint.

use meshmind_config::AppConfig;
use meshmind_core::inference::InferenceClient;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let client = meshmind_inference::build_client(&config.ollama);

    println!("🤖 Models at {}", config.ollama.url);
    println!("==========================================");

    match client.list_models().await {
        Ok(models) if models.is_empty() => {
            println!("  (none)");
            println!("\n  Pull one with: ollama pull llama3.2");
        }
        Ok(models) => {
            for model in &models {
                let marker = if *model == config.ollama.default_model {
                    " (default)"
                } else {
                    ""
                };
                println!("  - {model}{marker}");
            }
        }
        Err(e) => {
            println!("  ⚠️  Could not fetch models: {e}");
            return Err(e.to_string().into());
        }
    }

    Ok(())
}
