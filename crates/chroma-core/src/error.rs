//! Error types for chroma-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChromaError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
    #[error("settings codec error: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("settings storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ChromaError>;
