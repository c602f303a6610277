// crates/config/src/validator.rs

use tracing::warn;

use bienebot_core::{BienebotError, BienebotResult};

use crate::BienebotConfig;

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &BienebotConfig) -> BienebotResult<()> {
        // Validate NLU settings
        if config.nlu.server.is_empty() {
            return Err(BienebotError::Config("NLU server must be set".to_string()));
        }
        if config.nlu.app_id.is_empty() {
            return Err(BienebotError::Config("NLU app id must be set".to_string()));
        }
        if config.nlu.timeout_s == 0 {
            return Err(BienebotError::Config(
                "NLU timeout must be > 0".to_string(),
            ));
        }

        // Validate router settings
        if config.router.score_threshold < 0.0 || config.router.score_threshold > 1.0 {
            return Err(BienebotError::Config(
                "Score threshold must be 0.0-1.0".to_string(),
            ));
        }
        if config.router.marker_term.is_empty() {
            warn!("No marker term configured; keyword overlay is disabled");
        }

        // Validate responses settings
        if !config.responses.data_dir.exists() {
            warn!(
                "Response data dir does not exist: {:?}",
                config.responses.data_dir
            );
        }

        Ok(())
    }
}
