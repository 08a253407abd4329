//! Error types for the provider directory client.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Provider directory client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network error (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the backend's `detail` when it sent one.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected envelope
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            ClientError::Parse(_) => None,
        }
    }
}
