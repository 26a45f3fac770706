use thiserror::Error;

use crate::entity::PayloadError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShelfError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Payload error: {0}")]
    Payload(String),
    #[error("Replay error on {event}: {message}")]
    Replay { event: String, message: String },
}

pub type Result<T> = std::result::Result<T, ShelfError>;

impl From<PayloadError> for ShelfError {
    fn from(e: PayloadError) -> Self {
        Self::Payload(e.message)
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
