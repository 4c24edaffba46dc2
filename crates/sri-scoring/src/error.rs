use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("no responses to score")]
    NoResponses,

    #[error("responses matched no scale; nothing to score")]
    InsufficientData,
}
