//! Error types for classifier-rs

use thiserror::Error;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Classifier error types
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Caller supplied invalid input (blank text, bad training set)
    #[error("{0}")]
    Validation(String),

    /// Model component used before it was fitted
    #[error("This model has not been fitted yet")]
    NotFitted,

    /// Training corpus produced no vocabulary terms
    #[error("Empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure during preprocessing, vectorizing or classifying
    #[error("{0}")]
    Unexpected(String),
}

impl ClassifierError {
    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::EmptyVocabulary)
    }
}
