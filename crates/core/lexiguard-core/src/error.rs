//! Error types for LexiGuard core

use thiserror::Error;

/// Main error type for LexiGuard operations
#[derive(Debug, Error)]
pub enum LexiError {
    /// Generation endpoint answered 429
    #[error("API quota exceeded. Please wait a minute and try again.")]
    RateLimited,

    /// Generation endpoint answered with a non-success status
    #[error("API request failed with status {status}")]
    RequestFailed {
        /// HTTP status code returned by the endpoint
        status: u16,
    },

    /// Transport-level failure before an HTTP status was received
    #[error("Network error: {0}")]
    Transport(String),

    /// Call succeeded but the response carried no usable text
    #[error("The model returned an empty response")]
    EmptyResponse,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type using LexiError
pub type Result<T> = std::result::Result<T, LexiError>;

impl LexiError {
    /// Create a request-failed error from an HTTP status code
    pub fn request_failed(status: u16) -> Self {
        LexiError::RequestFailed { status }
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        LexiError::Transport(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        LexiError::Config(msg.into())
    }

    /// True for errors that originate from the generation call and are
    /// surfaced to the user as an assistant turn
    pub fn is_generation_error(&self) -> bool {
        matches!(
            self,
            LexiError::RateLimited
                | LexiError::RequestFailed { .. }
                | LexiError::Transport(_)
                | LexiError::EmptyResponse
        )
    }
}
