//! Error types for NEO metadata lookups

use thiserror::Error;

/// Result type for metadata lookups
pub type NeoResult<T> = Result<T, NeoError>;

/// Errors that can occur while fetching object metadata
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NeoError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for NeoError {
    fn from(err: serde_json::Error) -> Self {
        NeoError::Decode(err.to_string())
    }
}

impl From<ureq::Error> for NeoError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => NeoError::Status(code),
            ureq::Error::Transport(transport) => NeoError::Network(transport.to_string()),
        }
    }
}

impl From<std::io::Error> for NeoError {
    fn from(err: std::io::Error) -> Self {
        NeoError::Network(err.to_string())
    }
}
