//! Error types
//!
//! Rendering itself never fails; these errors come from the boundary
//! operations: loading type metadata, reading configuration, writing output.

use thiserror::Error;

/// Result type for typedoc-etch operations
pub type EtchResult<T> = Result<T, EtchError>;

/// Main error type for typedoc-etch
#[derive(Debug, Error)]
pub enum EtchError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input that parses as JSON but is not a list of type nodes
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EtchError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        EtchError::Config(message.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        EtchError::InvalidInput(message.into())
    }
}
