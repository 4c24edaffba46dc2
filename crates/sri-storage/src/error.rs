use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session not found: {id}")]
    NotFound { id: String },

    #[error("invalid session id: {0}")]
    InvalidSessionId(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
