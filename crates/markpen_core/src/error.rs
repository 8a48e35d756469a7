//! Error types for the ambient layers around the engine.
//!
//! The engine operations themselves cannot fail; these errors come from
//! loading configuration and decoding validation payloads.

use thiserror::Error;

/// Errors that can occur while preparing engine inputs.
#[derive(Debug, Error)]
pub enum MarkpenError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed validation payload.
    #[error("Payload error: {0}")]
    Payload(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MarkpenError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a payload error.
    pub fn payload(message: impl Into<String>) -> Self {
        Self::Payload(message.into())
    }
}
