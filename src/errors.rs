use thiserror::Error;

/// Error type that captures common platform failures.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
}
