use manhunt_types::ManhuntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key not found: {0}")]
    NotFound(String),

    #[error("conditional write failed: {0}")]
    ConditionFailed(String),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<StoreError> for ManhuntError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ConditionFailed(msg) => ManhuntError::ActionNotAllowed(msg),
            other => ManhuntError::Storage(other.to_string()),
        }
    }
}
