//! Error types for mvn-learning

use mvn_core::MvnError;
use thiserror::Error;

/// Result type for training operations
pub type LearningResult<T> = Result<T, LearningError>;

/// Errors raised while encoding samples or driving a learner
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LearningError {
    #[error(transparent)]
    Core(#[from] MvnError),

    #[error("Empty sample set")]
    EmptySampleSet,

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LearningError {
    fn from(err: serde_json::Error) -> Self {
        LearningError::Config(err.to_string())
    }
}
