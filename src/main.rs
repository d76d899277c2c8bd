// This is the entry point of the Discord bot.
//
// **Architecture Overview:**
// - `core/` = Command logic, configuration and the reply model (platform-agnostic)
// - `infra/` = Implementations of core traits (HTTP APIs)
// - `discord/` = Discord-specific adapters (commands, lifecycle)
//
// This file's job is to:
// 1. Initialize logging
// 2. Load configuration
// 3. Build the bot application and run it until it stops

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::config::BotConfig;
use crate::discord::bot_app::BotApp;
use anyhow::Context as _;

#[tokio::main]
async fn main() {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    if let Err(e) = run().await {
        tracing::error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = BotConfig::from_env().context("Failed to load configuration")?;
    let app = BotApp::new(config).context("Failed to initialize bot")?;
    app.run().await?;
    Ok(())
}
