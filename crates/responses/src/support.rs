// crates/responses/src/support.rs

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::debug;

use crate::{ResponseCatalog, ResponseHandler, Topic};
use bienebot_core::{BienebotError, BienebotResult, NluResponse};

/// Sub-keyed handler: the second dot-segment of the intent label selects the
/// support entry, e.g. "WiFi" for "Support.WiFi".
pub struct SupportResponses {
    catalog: Arc<ResponseCatalog>,
}

impl SupportResponses {
    pub fn new(catalog: Arc<ResponseCatalog>) -> Self {
        Self { catalog }
    }
}

impl ResponseHandler for SupportResponses {
    fn can_handle(&self, intent: &str) -> bool {
        Topic::Support
            .prefix()
            .map_or(false, |prefix| intent.starts_with(prefix))
    }

    fn get_message(
        &self,
        response: &NluResponse,
        rng: &mut dyn RngCore,
    ) -> BienebotResult<Vec<String>> {
        let sub_key = response
            .sub_key()
            .ok_or_else(|| BienebotError::UnknownSubKey(response.intent().to_string()))?;

        debug!("Looking for [{}] in the support catalog", sub_key);

        let pool = self
            .catalog
            .keyed(Topic::Support, sub_key)
            .ok_or_else(|| BienebotError::UnknownSubKey(sub_key.to_string()))?;

        let reply = pool
            .choose(rng)
            .ok_or_else(|| BienebotError::EmptyCatalog(format!("support.{}", sub_key)))?;

        Ok(vec![reply.clone()])
    }

    fn name(&self) -> &str {
        Topic::Support.name()
    }
}
