use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The model asset failed to load. Fatal for the lifetime of the adapter.
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("inference failed: {0}")]
    InferenceFailure(String),

    /// The decision procedure was handed an empty classification list.
    #[error("no classifications to decide on")]
    NoClassifications,
}

impl ClassifyError {
    /// Whether the caller may retry, possibly with a different image.
    #[allow(dead_code)]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ClassifyError::InvalidImage(_) | ClassifyError::InferenceFailure(_)
        )
    }
}
