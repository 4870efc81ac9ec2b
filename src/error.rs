//! Error Types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("local storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("storage access failed: {0}")]
    Storage(String),

    #[error("failed to encode todo list: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no todo item with id {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
