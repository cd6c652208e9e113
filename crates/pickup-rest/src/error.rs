//! REST client errors

use pickup_core::DomainError;
use serde::Deserialize;

/// Errors raised by the PostgREST client
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend responded {status}: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl RestError {
    /// Build an API error from a non-success status and the raw body
    ///
    /// PostgREST answers with `{code, message, details, hint}`; anything else
    /// is passed through as the message.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => Self::Api {
                status,
                code: parsed.code,
                message: parsed.message.unwrap_or_else(|| body.to_string()),
            },
            Err(_) => Self::Api {
                status,
                code: None,
                message: if body.is_empty() {
                    "empty response".to_string()
                } else {
                    body.to_string()
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: Option<String>,
}

impl From<RestError> for DomainError {
    fn from(err: RestError) -> Self {
        DomainError::backend(err)
    }
}
