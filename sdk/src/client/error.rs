//! Client error types.
//!
//! Provides the transport-level error raised by the request executor. The
//! resource operations wrap it into [`SdkError`](crate::SdkError) before it
//! reaches the caller.

use std::fmt;

/// Transport and API errors.
#[derive(Debug)]
pub enum ClientError {
    /// HTTP request failed (connection refused, DNS, TLS, body read).
    Request(reqwest::Error),

    /// Failed to deserialize a response.
    Deserialization(String),

    /// API returned a non-success status.
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response, or the raw body.
        message: String,
    },

    /// Resource not found (404).
    NotFound(String),

    /// Unauthorized (401).
    Unauthorized,

    /// Invalid configuration.
    InvalidConfig(String),

    /// Request rejected before sending (e.g. an unusable path id).
    InvalidRequest(String),

    /// Request timeout.
    Timeout,
}

impl ClientError {
    /// Returns the HTTP status carried by the error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            Self::Unauthorized => Some(401),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(e) => write!(f, "HTTP request failed: {}", e),
            Self::Deserialization(msg) => write!(f, "deserialization failed: {}", msg),
            Self::Api { status, message } => write!(f, "API error [{}]: {}", status, message),
            Self::NotFound(resource) => write!(f, "not found: {}", resource),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            Self::InvalidRequest(msg) => write!(f, "invalid request: {}", msg),
            Self::Timeout => write!(f, "request timeout"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialization(err.to_string())
    }
}
