// crates/config/src/lib.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use bienebot_core::BienebotResult;
use bienebot_nlu::NluSettings;
use bienebot_router::RouterConfig;

pub mod loader;
pub mod validator;

use loader::ConfigLoader;
use validator::ConfigValidator;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BienebotConfig {
    pub app: AppSettings,
    pub nlu: NluSettings,
    pub router: RouterConfig,
    pub responses: ResponsesSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponsesSettings {
    pub data_dir: PathBuf,
}

impl Default for BienebotConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                log_level: "info".to_string(),
            },
            nlu: NluSettings::default(),
            router: RouterConfig::default(),
            responses: ResponsesSettings {
                data_dir: PathBuf::from("config/responses"),
            },
        }
    }
}

/// Configuration manager
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
    config: Arc<RwLock<BienebotConfig>>,
}

impl ConfigManager {
    pub fn new(config_path: impl AsRef<Path>) -> BienebotResult<Self> {
        let config_path = config_path.as_ref().to_path_buf();
        let config = ConfigLoader::load_from_file(&config_path)?;

        ConfigValidator::validate(&config)?;

        Ok(Self {
            config_path,
            config: Arc::new(RwLock::new(config)),
        })
    }

    pub fn with_defaults() -> Self {
        Self {
            config_path: PathBuf::from("config/bienebot.toml"),
            config: Arc::new(RwLock::new(BienebotConfig::default())),
        }
    }

    pub fn get(&self) -> BienebotConfig {
        self.config.read().clone()
    }

    pub fn save(&self) -> BienebotResult<()> {
        let config = self.config.read();
        ConfigLoader::save_to_file(&self.config_path, &config)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bienebot_core::BienebotError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_usable() {
        let manager = ConfigManager::with_defaults();
        let config = manager.get();

        assert_eq!(config.app.log_level, "info");
        assert_eq!(config.router.score_threshold, 0.5);
        assert_eq!(config.router.marker_term, "biene");
        assert_eq!(config.nlu.subscription_key_env, "LUIS_SUBSCRIPTION_KEY");
    }

    #[test]
    fn loads_and_validates_toml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bienebot.toml");

        fs::write(
            &path,
            r#"
[app]
log_level = "debug"

[nlu]
server = "westeurope.api.cognitive.microsoft.com"
app_id = "0a1b2c3d"

[router]
score_threshold = 0.6

[responses]
data_dir = "config/responses"
"#,
        )
        .unwrap();

        let manager = ConfigManager::new(&path).unwrap();
        let config = manager.get();

        assert_eq!(config.app.log_level, "debug");
        assert_eq!(config.nlu.app_id, "0a1b2c3d");
        assert!((config.router.score_threshold - 0.6).abs() < f32::EPSILON);
        // Unset fields fall back to serde defaults.
        assert_eq!(config.router.marker_fragment, "BIENE");
        assert_eq!(config.nlu.timeout_s, 5);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bienebot.toml");

        fs::write(
            &path,
            r#"
[app]
log_level = "info"

[nlu]
server = "westeurope.api.cognitive.microsoft.com"
app_id = "0a1b2c3d"

[router]
score_threshold = 1.5

[responses]
data_dir = "config/responses"
"#,
        )
        .unwrap();

        let err = ConfigManager::new(&path).unwrap_err();
        assert!(matches!(err, BienebotError::Config(_)));
    }

    #[test]
    fn env_overrides_apply() {
        std::env::set_var("BIENEBOT_NLU_APP_ID", "from-env");
        std::env::set_var("BIENEBOT_SCORE_THRESHOLD", "0.8");

        let config = ConfigLoader::load_from_env().unwrap();
        assert_eq!(config.nlu.app_id, "from-env");
        assert!((config.router.score_threshold - 0.8).abs() < f32::EPSILON);

        std::env::remove_var("BIENEBOT_NLU_APP_ID");
        std::env::remove_var("BIENEBOT_SCORE_THRESHOLD");
    }

    #[test]
    fn round_trips_through_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bienebot.toml");

        let mut config = BienebotConfig::default();
        config.nlu.app_id = "round-trip".to_string();
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let manager = ConfigManager::new(&path).unwrap();
        assert_eq!(manager.get().nlu.app_id, "round-trip");
    }
}
