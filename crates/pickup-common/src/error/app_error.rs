//! Application error types
//!
//! Unified error type for startup and request handling.

use pickup_core::DomainError;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Backend errors
    #[error("Backend error: {0}")]
    Backend(String),

    // Server lifecycle errors (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Get HTTP status code for this error
    ///
    /// Nothing the archiver does is the caller's fault, so every variant is a
    /// server error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Config(_)
            | Self::Backend(_)
            | Self::Server(_)
            | Self::Domain(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Backend(_) => "BACKEND_ERROR",
            Self::Server(_) => "SERVER_ERROR",
            Self::Domain(e) => e.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
