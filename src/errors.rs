//! Error types for the hrbuddy agent system
//!
//! Provides a single crate-wide error enum with context propagation.
//! Model-call failures are deliberately not retried anywhere: they
//! propagate to the caller and abort the current query only.

use thiserror::Error;

/// Main error type for the multi-agent system
#[derive(Error, Debug)]
pub enum AgentError {
    /// Missing model credential - fatal, detected before any query runs
    #[error("Missing GROQ_API_KEY. Set it in the environment before starting.")]
    MissingApiKey,

    /// Groq API returned a non-success status
    #[error("Groq API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// The completion response carried no usable text
    #[error("Model returned an empty completion")]
    EmptyCompletion,

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors (document loading in the CLI)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;
