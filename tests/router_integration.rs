// tests/router_integration.rs

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use bienebot_core::{BienebotResult, NluResponse, ScoredIntent};
use bienebot_nlu::IntentResolver;
use bienebot_responses::{ResponseCatalog, Topic};
use bienebot_router::{IntentRouter, RouterConfig};

struct StaticResolver {
    intent: &'static str,
    score: f32,
}

#[async_trait]
impl IntentResolver for StaticResolver {
    async fn resolve(&self, query: &str) -> BienebotResult<NluResponse> {
        Ok(NluResponse {
            query: query.to_string(),
            top_scoring_intent: ScoredIntent {
                intent: self.intent.to_string(),
                score: self.score,
            },
        })
    }

    fn name(&self) -> &str {
        "static"
    }
}

fn shipped_catalog() -> Arc<ResponseCatalog> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/responses");
    Arc::new(ResponseCatalog::load(&dir).expect("shipped catalog must load"))
}

fn router(intent: &'static str, score: f32) -> IntentRouter {
    IntentRouter::with_seed(
        Arc::new(StaticResolver { intent, score }),
        shipped_catalog(),
        RouterConfig::default(),
        17,
    )
    .expect("router must build from shipped catalog")
}

#[test]
fn shipped_catalog_covers_every_topic() {
    let catalog = shipped_catalog();

    for topic in Topic::ALL {
        if topic == Topic::Support {
            continue;
        }
        assert!(
            !catalog.pool(topic).unwrap().is_empty(),
            "topic {} must have candidates",
            topic.name()
        );
    }

    assert!(catalog.keyed(Topic::Support, "WiFi").is_some());
    assert!(catalog.keyed(Topic::Support, "Power").is_some());
}

#[tokio::test]
async fn routes_hardware_lab_question_end_to_end() {
    let router = router("HardwareLab.Location", 0.92);
    let reply = router.route("where is the hardware lab").await.unwrap();

    assert_eq!(reply.fragments.len(), 1);
    assert!(shipped_catalog()
        .pool(Topic::HardwareLab)
        .unwrap()
        .contains(&reply.fragments[0]));
    assert_eq!(reply.intent, "HardwareLab.Location");
}

#[tokio::test]
async fn greeting_with_marker_appends_fragment() {
    let router = router("Smalltalk.Greeting", 0.8);
    let reply = router.route("hi biene").await.unwrap();

    assert_eq!(reply.fragments.len(), 2);
    assert!(shipped_catalog()
        .pool(Topic::Smalltalk)
        .unwrap()
        .contains(&reply.fragments[0]));
    assert_eq!(reply.fragments[1], "BIENE");
}

#[tokio::test]
async fn low_confidence_query_gets_error_fallback() {
    let router = router("HackUPC.Dates", 0.1);
    let reply = router.route("when is it").await.unwrap();

    assert_eq!(reply.fragments.len(), 1);
    assert!(shipped_catalog()
        .pool(Topic::Error)
        .unwrap()
        .contains(&reply.fragments[0]));
}

#[tokio::test]
async fn support_sub_key_answers_from_support_table() {
    let router = router("Support.WiFi", 0.95);
    let reply = router.route("the wifi does not work").await.unwrap();

    assert_eq!(reply.fragments.len(), 1);
    let catalog = shipped_catalog();
    let wifi = catalog.keyed(Topic::Support, "WiFi").unwrap();
    assert!(wifi.contains(&reply.fragments[0]));
}
