//! Error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown category id: {0}")]
    UnknownCategory(u64),

    #[error("Invalid site document: {0}")]
    InvalidSite(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
