//! `meshmind onboard` — First-time setup.

use meshmind_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");
    let data_dir = config_dir.join("data");

    println!("🕸️  meshmind — First-Time Setup");
    println!("==============================\n");

    // Create directories
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
        println!("✅ Created data directory: {}", data_dir.display());
    }

    // Create config file
    if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run onboard.\n");
    } else {
        let default_toml = AppConfig::default_toml();
        std::fs::write(&config_path, &default_toml)?;
        println!("✅ Created config.toml at: {}", config_path.display());
        println!("\n📝 Next steps:");
        println!("   1. Make sure Ollama is running: ollama serve");
        println!("   2. Pull a model: ollama pull llama3.2");
        println!("   3. Run: meshmind run");
        println!("   4. Add admin sender hashes to config.toml for admin commands\n");
    }

    println!("🎉 Setup complete! Run `meshmind run` to start the bot.\n");

    Ok(())
}
