// crates/responses/src/lib.rs

use std::sync::Arc;

use rand::RngCore;

use bienebot_core::{BienebotResult, NluResponse};

pub mod catalog;
pub mod error;
pub mod pool;
pub mod support;

pub use catalog::{ResponseCatalog, Topic, TopicData};
pub use error::ErrorResponses;
pub use pool::PoolResponses;
pub use support::SupportResponses;

/// Reply-selection capability, one object per topic.
pub trait ResponseHandler: Send + Sync {
    fn can_handle(&self, intent: &str) -> bool;
    fn get_message(
        &self,
        response: &NluResponse,
        rng: &mut dyn RngCore,
    ) -> BienebotResult<Vec<String>>;
    fn name(&self) -> &str;
}

/// Builds one handler per dispatchable topic, in priority order. The Error
/// topic is not part of the walk; the router holds it separately.
pub fn build_handlers(catalog: &Arc<ResponseCatalog>) -> Vec<Box<dyn ResponseHandler>> {
    Topic::DISPATCH_ORDER
        .iter()
        .map(|&topic| match topic {
            Topic::Support => {
                Box::new(SupportResponses::new(catalog.clone())) as Box<dyn ResponseHandler>
            }
            _ => Box::new(PoolResponses::new(topic, catalog.clone())),
        })
        .collect()
}
