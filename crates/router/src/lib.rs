use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use bienebot_core::{BienebotResult, NluResponse};
use bienebot_nlu::IntentResolver;
use bienebot_responses::{build_handlers, ErrorResponses, ResponseCatalog, ResponseHandler};

pub mod keyword;

pub use keyword::KeywordOverlay;

const DEFAULT_SCORE_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f32,
    #[serde(default = "default_marker_term")]
    pub marker_term: String,
    #[serde(default = "default_marker_fragment")]
    pub marker_fragment: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            score_threshold: default_score_threshold(),
            marker_term: default_marker_term(),
            marker_fragment: default_marker_fragment(),
        }
    }
}

fn default_score_threshold() -> f32 {
    DEFAULT_SCORE_THRESHOLD
}

fn default_marker_term() -> String {
    "biene".to_string()
}

fn default_marker_fragment() -> String {
    "BIENE".to_string()
}

/// Final answer for one routed query.
#[derive(Debug, Clone)]
pub struct RouteReply {
    pub fragments: Vec<String>,
    pub intent: String,
    pub score: f32,
}

#[derive(Debug, Default, Clone)]
pub struct RouterMetrics {
    pub total_requests: u64,
    pub dispatched: u64,
    pub low_confidence: u64,
    pub overlay_hits: u64,
    pub fallbacks: u64,
    pub nlu_failures: u64,
}

/// Orchestrates one request: clean the query, resolve the intent, gate on
/// confidence, dispatch by prefix, merge the keyword overlay.
pub struct IntentRouter {
    resolver: Arc<dyn IntentResolver>,
    handlers: Vec<Box<dyn ResponseHandler>>,
    error: ErrorResponses,
    overlay: KeywordOverlay,
    config: RouterConfig,
    marker_pattern: Regex,
    rng: Mutex<StdRng>,
    metrics: Arc<RwLock<RouterMetrics>>,
}

impl IntentRouter {
    pub fn new(
        resolver: Arc<dyn IntentResolver>,
        catalog: Arc<ResponseCatalog>,
        config: RouterConfig,
    ) -> BienebotResult<Self> {
        Self::with_rng(resolver, catalog, config, StdRng::from_entropy())
    }

    /// Deterministic variant: all reply selection is a pure function of the
    /// seed and the catalog state.
    pub fn with_seed(
        resolver: Arc<dyn IntentResolver>,
        catalog: Arc<ResponseCatalog>,
        config: RouterConfig,
        seed: u64,
    ) -> BienebotResult<Self> {
        Self::with_rng(resolver, catalog, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        resolver: Arc<dyn IntentResolver>,
        catalog: Arc<ResponseCatalog>,
        config: RouterConfig,
        rng: StdRng,
    ) -> BienebotResult<Self> {
        let handlers = build_handlers(&catalog);
        let error = ErrorResponses::new(&catalog)?;
        let overlay = KeywordOverlay::new(&config.marker_term, &config.marker_fragment);
        let marker_pattern = Regex::new(r":[A-Za-z0-9_]+:").unwrap();

        Ok(Self {
            resolver,
            handlers,
            error,
            overlay,
            config,
            marker_pattern,
            rng: Mutex::new(rng),
            metrics: Arc::new(RwLock::new(RouterMetrics::default())),
        })
    }

    /// Single entry point for the front-end. Fails only when the NLU service
    /// is unavailable; every other failure is substituted with the Error
    /// fallback here.
    pub async fn route(&self, query: &str) -> BienebotResult<RouteReply> {
        self.metrics.write().total_requests += 1;

        let cleaned = self.clean_query(query);
        debug!("Routing query [{}]", cleaned);

        let response = match self.resolver.resolve(&cleaned).await {
            Ok(response) => response,
            Err(e) => {
                self.metrics.write().nlu_failures += 1;
                return Err(e);
            }
        };

        let fragments = self.dispatch(&response);

        Ok(RouteReply {
            fragments,
            intent: response.top_scoring_intent.intent,
            score: response.top_scoring_intent.score,
        })
    }

    pub fn metrics(&self) -> RouterMetrics {
        self.metrics.read().clone()
    }

    /// Removes colon-delimited marker tokens such as `:smile:` and trims
    /// surrounding whitespace.
    fn clean_query(&self, query: &str) -> String {
        self.marker_pattern
            .replace_all(query, "")
            .trim()
            .to_string()
    }

    fn dispatch(&self, response: &NluResponse) -> Vec<String> {
        match self.try_dispatch(response) {
            Ok(fragments) => fragments,
            Err(e) => {
                warn!(
                    "Dispatch failed for intent '{}', substituting fallback: {}",
                    response.intent(),
                    e
                );
                self.metrics.write().fallbacks += 1;
                self.error_fallback()
            }
        }
    }

    fn try_dispatch(&self, response: &NluResponse) -> BienebotResult<Vec<String>> {
        let intent = response.intent();

        // Below the confidence gate nothing is dispatched, not even the
        // keyword overlay.
        if response.score() < self.config.score_threshold {
            debug!(
                "Score {:.2} below threshold {:.2} for intent '{}'",
                response.score(),
                self.config.score_threshold,
                intent
            );
            self.metrics.write().low_confidence += 1;
            return Ok(self.error_fallback());
        }

        let matched = self.handlers.iter().find(|h| h.can_handle(intent));

        let mut fragments = match matched {
            Some(handler) => {
                debug!("Dispatching intent '{}' to handler '{}'", intent, handler.name());
                let picked = {
                    let mut rng = self.rng.lock();
                    handler.get_message(response, &mut *rng)?
                };
                self.metrics.write().dispatched += 1;
                picked
            }
            None => {
                // Unrouted intent: the overlay replaces the reply entirely.
                return if self.overlay.detect(&response.query) {
                    self.metrics.write().overlay_hits += 1;
                    Ok(vec![self.overlay.fragment().to_string()])
                } else {
                    debug!("No handler for intent '{}'", intent);
                    Ok(self.error_fallback())
                };
            }
        };

        if self.overlay.detect(&response.query) {
            self.metrics.write().overlay_hits += 1;
            fragments.push(self.overlay.fragment().to_string());
        }

        Ok(fragments)
    }

    fn error_fallback(&self) -> Vec<String> {
        let mut rng = self.rng.lock();
        self.error.get_message(&mut *rng)
    }
}
