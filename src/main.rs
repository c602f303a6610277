// src/main.rs

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bienebot_config::{BienebotConfig, ConfigManager};

mod app;

use app::BienebotApp;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    info!("Starting bienebot v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;

    let app = BienebotApp::new(config)?;
    app.run().await?;

    info!("bienebot shut down successfully");
    Ok(())
}

fn init_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bienebot=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}

fn load_config() -> Result<BienebotConfig> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/bienebot.toml".to_string());

    if std::path::Path::new(&path).exists() {
        Ok(ConfigManager::new(&path)?.get())
    } else {
        info!("Config file {} not found, using defaults", path);
        Ok(ConfigManager::with_defaults().get())
    }
}
