use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use bienebot_core::{BienebotResult, NluResponse};

pub mod luis;

pub use luis::LuisClient;

const DEFAULT_TIMEOUT_S: u64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NluSettings {
    pub server: String,
    pub app_id: String,
    #[serde(default = "default_subscription_key_env")]
    pub subscription_key_env: String,
    #[serde(default = "default_timeout_s")]
    pub timeout_s: u64,
    #[serde(default)]
    pub spell_check: bool,
    #[serde(default)]
    pub staging: bool,
}

impl Default for NluSettings {
    fn default() -> Self {
        Self {
            server: "westus.api.cognitive.microsoft.com".to_string(),
            app_id: String::new(),
            subscription_key_env: default_subscription_key_env(),
            timeout_s: default_timeout_s(),
            spell_check: false,
            staging: false,
        }
    }
}

fn default_subscription_key_env() -> String {
    "LUIS_SUBSCRIPTION_KEY".to_string()
}

fn default_timeout_s() -> u64 {
    DEFAULT_TIMEOUT_S
}

/// Boundary between the router and the NLU transport.
#[async_trait]
pub trait IntentResolver: Send + Sync {
    async fn resolve(&self, query: &str) -> BienebotResult<NluResponse>;
    fn name(&self) -> &str;
}
