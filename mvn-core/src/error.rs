//! Error types for mvn-core

use thiserror::Error;

/// Result type for neuron and network operations
pub type Result<T> = std::result::Result<T, MvnError>;

/// Errors raised by neurons, networks and the forward evaluator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MvnError {
    #[error("Invalid construction: {0}")]
    InvalidConstruction(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Dimension mismatch: expected {expected} inputs, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Continuous activation of a zero weighted sum
    #[error("Singular activation: continuous activation of a zero weighted sum")]
    SingularActivation,

    #[error("Singular correction: {0}")]
    SingularCorrection(String),

    #[error("Size mismatch for {what}: expected {expected}, got {actual}")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MvnError {
    pub(crate) fn dimension(expected: usize, actual: usize) -> Self {
        MvnError::DimensionMismatch { expected, actual }
    }
}

impl From<serde_json::Error> for MvnError {
    fn from(err: serde_json::Error) -> Self {
        MvnError::Serialization(err.to_string())
    }
}
