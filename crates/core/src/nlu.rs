// crates/core/src/nlu.rs
use serde::{Deserialize, Serialize};

/// Top-scoring intent returned by the NLU service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredIntent {
    pub intent: String,
    pub score: f32,
}

/// Classification result for one query, as echoed back by the NLU service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NluResponse {
    pub query: String,
    pub top_scoring_intent: ScoredIntent,
}

impl NluResponse {
    pub fn intent(&self) -> &str {
        &self.top_scoring_intent.intent
    }

    pub fn score(&self) -> f32 {
        self.top_scoring_intent.score
    }

    /// Second dot-segment of the intent label, e.g. "WiFi" for "Support.WiFi".
    pub fn sub_key(&self) -> Option<&str> {
        self.top_scoring_intent.intent.split('.').nth(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_luis_payload() {
        let payload = serde_json::json!({
            "query": "where is the hardware lab",
            "topScoringIntent": {
                "intent": "HardwareLab.Location",
                "score": 0.92
            }
        });

        let response: NluResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.query, "where is the hardware lab");
        assert_eq!(response.intent(), "HardwareLab.Location");
        assert!((response.score() - 0.92).abs() < f32::EPSILON);
        assert_eq!(response.sub_key(), Some("Location"));
    }

    #[test]
    fn sub_key_absent_for_bare_intent() {
        let response = NluResponse {
            query: "hello".to_string(),
            top_scoring_intent: ScoredIntent {
                intent: "None".to_string(),
                score: 0.3,
            },
        };
        assert_eq!(response.sub_key(), None);
    }
}
