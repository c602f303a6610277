// crates/responses/src/pool.rs

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::{ResponseCatalog, ResponseHandler, Topic};
use bienebot_core::{BienebotError, BienebotResult, NluResponse};

/// Handler for every single-pool topic: the whole topic shares one candidate
/// set, no sub-keying.
pub struct PoolResponses {
    topic: Topic,
    catalog: Arc<ResponseCatalog>,
}

impl PoolResponses {
    pub fn new(topic: Topic, catalog: Arc<ResponseCatalog>) -> Self {
        Self { topic, catalog }
    }
}

impl ResponseHandler for PoolResponses {
    fn can_handle(&self, intent: &str) -> bool {
        self.topic
            .prefix()
            .map_or(false, |prefix| intent.starts_with(prefix))
    }

    fn get_message(
        &self,
        _response: &NluResponse,
        rng: &mut dyn RngCore,
    ) -> BienebotResult<Vec<String>> {
        let pool = self.catalog.pool(self.topic)?;
        let reply = pool
            .choose(rng)
            .ok_or_else(|| BienebotError::EmptyCatalog(self.topic.name().to_string()))?;

        Ok(vec![reply.clone()])
    }

    fn name(&self) -> &str {
        self.topic.name()
    }
}
