//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid game schedule: {0}")]
    InvalidSchedule(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Backend error: {0}")]
    Backend(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSchedule(_) => "INVALID_SCHEDULE",
            Self::MalformedRecord(_) => "MALFORMED_RECORD",
            Self::Backend(_) => "BACKEND_ERROR",
        }
    }

    /// Check if the error came from the backend query interface
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend(_) | Self::MalformedRecord(_))
    }

    /// Create a backend error from any displayable error
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}
