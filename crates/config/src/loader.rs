// crates/config/src/loader.rs

use std::path::Path;

use bienebot_core::{BienebotError, BienebotResult};

use crate::BienebotConfig;

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load_from_file(path: &Path) -> BienebotResult<BienebotConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BienebotError::Config(format!("Failed to read config: {}", e)))?;

        let config: BienebotConfig = toml::from_str(&content)
            .map_err(|e| BienebotError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    pub fn save_to_file(path: &Path, config: &BienebotConfig) -> BienebotResult<()> {
        let content = toml::to_string_pretty(config)
            .map_err(|e| BienebotError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| BienebotError::Config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn load_from_env() -> BienebotResult<BienebotConfig> {
        let mut config = BienebotConfig::default();

        // Override with environment variables
        if let Ok(level) = std::env::var("BIENEBOT_LOG_LEVEL") {
            config.app.log_level = level;
        }
        if let Ok(server) = std::env::var("BIENEBOT_NLU_SERVER") {
            config.nlu.server = server;
        }
        if let Ok(app_id) = std::env::var("BIENEBOT_NLU_APP_ID") {
            config.nlu.app_id = app_id;
        }
        if let Ok(threshold) = std::env::var("BIENEBOT_SCORE_THRESHOLD") {
            config.router.score_threshold = threshold
                .parse()
                .map_err(|_| BienebotError::Config("Invalid score threshold".to_string()))?;
        }

        Ok(config)
    }
}
