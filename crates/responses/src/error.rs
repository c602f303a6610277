// crates/responses/src/error.rs

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::{ResponseCatalog, Topic};
use bienebot_core::{BienebotError, BienebotResult};

/// Universal fallback. The pool is cloned out of the catalog at construction
/// and checked non-empty, so per-request selection cannot fail.
pub struct ErrorResponses {
    pool: Vec<String>,
}

impl ErrorResponses {
    pub fn new(catalog: &ResponseCatalog) -> BienebotResult<Self> {
        let pool = catalog.pool(Topic::Error)?.to_vec();

        if pool.is_empty() {
            return Err(BienebotError::EmptyCatalog(Topic::Error.name().to_string()));
        }

        Ok(Self { pool })
    }

    pub fn get_message(&self, rng: &mut dyn RngCore) -> Vec<String> {
        match self.pool.choose(rng) {
            Some(reply) => vec![reply.clone()],
            None => Vec::new(),
        }
    }
}
