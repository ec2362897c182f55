use thiserror::Error;

use crate::implementations::config::ConfigError;

/// Custom error types for the verification harness
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Language '{0}' is not supported")]
    UnsupportedLanguage(String),

    #[error("No output returned; check for compilation or runtime errors")]
    NoOutput,

    #[error("Failed to parse model response: {0}")]
    SchemaParse(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type specific to harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

impl HarnessError {
    /// Transport failures may succeed on a retry; schema and configuration
    /// failures will not. The harness itself never retries either kind.
    pub fn is_retryable(&self) -> bool {
        matches!(self, HarnessError::Network(_) | HarnessError::Http { .. })
    }
}
