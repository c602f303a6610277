// crates/core/src/result.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BienebotError {
    #[error("NLU service unavailable: {0}")]
    NluUnavailable(String),

    #[error("No support entry for sub-key '{0}'")]
    UnknownSubKey(String),

    #[error("Response catalog for '{0}' has no candidates")]
    EmptyCatalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type BienebotResult<T> = Result<T, BienebotError>;
