// crates/nlu/src/luis.rs

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::{IntentResolver, NluSettings};
use bienebot_core::{BienebotError, BienebotResult, NluResponse};

/// LUIS v2 client.
pub struct LuisClient {
    client: reqwest::Client,
    settings: NluSettings,
    endpoint: String,
}

impl LuisClient {
    pub fn new(settings: NluSettings) -> BienebotResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_s))
            .build()
            .map_err(|e| {
                BienebotError::NluUnavailable(format!("Failed to build HTTP client: {}", e))
            })?;

        let endpoint = format!(
            "https://{}/luis/v2.0/apps/{}",
            settings.server, settings.app_id
        );

        Ok(Self {
            client,
            settings,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn subscription_key(&self) -> BienebotResult<String> {
        std::env::var(&self.settings.subscription_key_env).map_err(|_| {
            BienebotError::Config(format!(
                "API key not found for env var {}",
                self.settings.subscription_key_env
            ))
        })
    }
}

#[async_trait]
impl IntentResolver for LuisClient {
    async fn resolve(&self, query: &str) -> BienebotResult<NluResponse> {
        let key = self.subscription_key()?;

        debug!("Resolving intent for query [{}]", query);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", key)
            .query(&[
                ("q", query),
                ("timezoneOffset", "0"),
                ("verbose", "false"),
                ("spellCheck", bool_param(self.settings.spell_check)),
                ("staging", bool_param(self.settings.staging)),
            ])
            .send()
            .await
            .map_err(|e| BienebotError::NluUnavailable(format!("NLU request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(BienebotError::NluUnavailable(format!(
                "NLU responded with status {}",
                response.status()
            )));
        }

        response.json::<NluResponse>().await.map_err(|e| {
            BienebotError::NluUnavailable(format!("Failed to parse NLU response: {}", e))
        })
    }

    fn name(&self) -> &str {
        "luis"
    }
}

fn bool_param(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
