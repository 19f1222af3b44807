//! Error types for remote service calls.

use thiserror::Error;

/// Errors that can occur while talking to the remote service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The request never produced a response (connection, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, usually the service's error text.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The configured API base is not a valid URL.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Client configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns a user-friendly error message suitable for an alert.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => {
                "Could not reach the dashboard service. Please check that it is running."
            }
            Self::Status { status, .. } if *status >= 500 => {
                "The dashboard service failed to process the request."
            }
            Self::Status { .. } => "The dashboard service rejected the request.",
            Self::Decode(_) => "The dashboard service sent an unexpected response.",
            Self::InvalidBaseUrl(_) | Self::Config(_) => {
                "The dashboard client is misconfigured."
            }
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Decode(_) | Self::InvalidBaseUrl(_) | Self::Config(_) => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for remote service calls.
pub type Result<T> = std::result::Result<T, ClientError>;
