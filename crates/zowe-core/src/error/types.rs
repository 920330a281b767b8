//! Core error types and traits

use thiserror::Error;

/// Result type alias for session resolution operations
pub type ZoweResult<T> = Result<T, ZoweError>;

/// Unified error trait implemented by every error in this crate.
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }

    /// True when the error was caused by the end user rather than the caller
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Main error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZoweError {
    /// A caller broke the contract of the resolution pipeline
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// A value supplied by the end user cannot be used
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
        context: Option<String>,
    },

    /// No answer arrived for a prompted property
    #[error("{message}")]
    Timeout {
        message: String,
        property: String,
        context: Option<String>,
    },

    /// The prompt primitive itself failed
    #[error("Prompt error: {message}")]
    Prompt {
        message: String,
        context: Option<String>,
    },

    /// A proxy agent could not be turned into a client proxy
    #[error("Proxy error: {message}")]
    Proxy {
        message: String,
        url: Option<String>,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        context: Option<String>,
    },

    /// The user aborted an interactive step
    #[error("Operation was cancelled")]
    Cancelled,

    /// Generic error with context
    #[error("Error: {message}")]
    Other {
        message: String,
        context: Option<String>,
    },
}
