// crates/responses/src/catalog.rs

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use bienebot_core::{BienebotError, BienebotResult};

/// Top-level taxonomy segment of an intent label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Activities,
    HackUpc,
    HardwareLab,
    Logistics,
    Meals,
    Mentor,
    Places,
    Projects,
    Smalltalk,
    Sponsors,
    Support,
    Error,
}

impl Topic {
    /// Dispatch priority. `Indication.Activity` must precede
    /// `Indication.Place`: both share the `Indication.` stem.
    pub const DISPATCH_ORDER: [Topic; 11] = [
        Topic::Activities,
        Topic::HackUpc,
        Topic::HardwareLab,
        Topic::Logistics,
        Topic::Meals,
        Topic::Mentor,
        Topic::Places,
        Topic::Projects,
        Topic::Smalltalk,
        Topic::Sponsors,
        Topic::Support,
    ];

    pub const ALL: [Topic; 12] = [
        Topic::Activities,
        Topic::HackUpc,
        Topic::HardwareLab,
        Topic::Logistics,
        Topic::Meals,
        Topic::Mentor,
        Topic::Places,
        Topic::Projects,
        Topic::Smalltalk,
        Topic::Sponsors,
        Topic::Support,
        Topic::Error,
    ];

    /// Intent-label prefix served by this topic. The Error topic is never
    /// dispatched by prefix.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Topic::Activities => Some("Indication.Activity"),
            Topic::HackUpc => Some("HackUPC"),
            Topic::HardwareLab => Some("HardwareLab"),
            Topic::Logistics => Some("Logistics"),
            Topic::Meals => Some("Meals"),
            Topic::Mentor => Some("Mentor"),
            Topic::Places => Some("Indication.Place"),
            Topic::Projects => Some("Project"),
            Topic::Smalltalk => Some("Smalltalk"),
            Topic::Sponsors => Some("Sponsors"),
            Topic::Support => Some("Support"),
            Topic::Error => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Topic::Activities => "activities",
            Topic::HackUpc => "hackupc",
            Topic::HardwareLab => "hardware_lab",
            Topic::Logistics => "logistics",
            Topic::Meals => "meals",
            Topic::Mentor => "mentor",
            Topic::Places => "places",
            Topic::Projects => "projects",
            Topic::Smalltalk => "smalltalk",
            Topic::Sponsors => "sponsors",
            Topic::Support => "support",
            Topic::Error => "error",
        }
    }
}

/// Candidate replies for one topic.
#[derive(Debug, Clone)]
pub enum TopicData {
    Pool(Vec<String>),
    Keyed(HashMap<String, Vec<String>>),
}

#[derive(Debug, Deserialize)]
struct PoolFile {
    answer: Vec<String>,
}

/// All candidate replies, loaded once at startup and immutable afterwards.
#[derive(Debug)]
pub struct ResponseCatalog {
    topics: HashMap<Topic, TopicData>,
}

impl ResponseCatalog {
    /// Reads `<dir>/<topic>.json` for every topic. A missing or unparsable
    /// file and an empty candidate pool are both startup faults.
    pub fn load(dir: &Path) -> BienebotResult<Self> {
        let mut topics = HashMap::new();

        for topic in Topic::ALL {
            topics.insert(topic, Self::load_topic(dir, topic)?);
        }

        Ok(Self { topics })
    }

    fn load_topic(dir: &Path, topic: Topic) -> BienebotResult<TopicData> {
        let path = dir.join(format!("{}.json", topic.name()));
        let content = fs::read_to_string(&path).map_err(|e| {
            BienebotError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        match topic {
            Topic::Support => {
                let entries: HashMap<String, Vec<String>> = serde_json::from_str(&content)
                    .map_err(|e| {
                        BienebotError::Config(format!("Failed to parse {}: {}", path.display(), e))
                    })?;

                if entries.is_empty() {
                    return Err(BienebotError::EmptyCatalog(topic.name().to_string()));
                }
                for (key, pool) in &entries {
                    if pool.is_empty() {
                        return Err(BienebotError::EmptyCatalog(format!(
                            "{}.{}",
                            topic.name(),
                            key
                        )));
                    }
                }

                Ok(TopicData::Keyed(entries))
            }
            _ => {
                let file: PoolFile = serde_json::from_str(&content).map_err(|e| {
                    BienebotError::Config(format!("Failed to parse {}: {}", path.display(), e))
                })?;

                if file.answer.is_empty() {
                    return Err(BienebotError::EmptyCatalog(topic.name().to_string()));
                }

                Ok(TopicData::Pool(file.answer))
            }
        }
    }

    pub fn pool(&self, topic: Topic) -> BienebotResult<&[String]> {
        match self.topics.get(&topic) {
            Some(TopicData::Pool(pool)) => Ok(pool),
            _ => Err(BienebotError::EmptyCatalog(topic.name().to_string())),
        }
    }

    pub fn keyed(&self, topic: Topic, key: &str) -> Option<&[String]> {
        match self.topics.get(&topic) {
            Some(TopicData::Keyed(entries)) => entries.get(key).map(Vec::as_slice),
            _ => None,
        }
    }
}
