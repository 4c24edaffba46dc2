use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("unknown question '{question_id}' for scale '{scale_id}'")]
    UnknownQuestion {
        scale_id: String,
        question_id: String,
    },
}
