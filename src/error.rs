//! Error taxonomy for API operations.
//!
//! The registry raises [`ApiError::InvalidArgument`] for problems it can
//! detect before issuing a request; everything else is a direct mapping of
//! the transport outcome. No error is retried or recovered locally.

use thiserror::Error;

/// Failure of a single API operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing identifier, unknown resource key, or an argument
    /// shape problem detected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Server rejected the payload (HTTP 400/422).
    #[error("server rejected payload ({status}): {message}")]
    Validation { status: u16, message: String },

    /// Credential missing or invalid (HTTP 401).
    #[error("authentication required")]
    Unauthorized,

    /// Credential valid but insufficient (HTTP 403).
    #[error("permission denied")]
    Forbidden,

    /// Resource or parent board does not exist (HTTP 404).
    #[error("resource not found")]
    NotFound,

    /// Any other non-success status (rate limits, 5xx, ...).
    #[error("request failed ({status}): {message}")]
    Transport { status: u16, message: String },

    /// Network-level failure before a status code was available.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Map an HTTP status and (sanitized) body message onto the taxonomy.
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            400 | 422 => ApiError::Validation { status, message },
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            _ => ApiError::Transport { status, message },
        }
    }
}

/// Format an API error for display to end users.
pub fn format_api_error(error: &ApiError) -> String {
    match error {
        ApiError::InvalidArgument(msg) => format!("Invalid request: {}.", msg),
        ApiError::Validation { .. } => "The server rejected the submitted data. Check your input.".to_string(),
        ApiError::Unauthorized => "Authentication failed. Sign in again to refresh your session.".to_string(),
        ApiError::Forbidden => "Permission denied for this vision board.".to_string(),
        ApiError::NotFound => "Resource not found.".to_string(),
        ApiError::Transport { status, .. } if *status == 429 => {
            "Rate limit exceeded. Please try again later.".to_string()
        }
        ApiError::Transport { status, .. } if *status >= 500 => {
            "Service temporarily unavailable. Please try again.".to_string()
        }
        ApiError::Transport { .. } | ApiError::Network(_) => {
            "Request failed. Check your network connection and try again.".to_string()
        }
        ApiError::Decode(_) => "Received an unreadable response from the server.".to_string(),
    }
}
