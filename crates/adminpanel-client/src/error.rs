//! Error types for the admin client.

use thiserror::Error;

/// Errors that can occur when calling the admin API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// No response was received (DNS, connect, TLS, reset, timeout).
    #[error("Network failure: {0}")]
    Network(String),

    /// Server answered with a status outside 2xx.
    #[error("Server rejected request ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// `message` (or `error`) field of the response body, if any.
        message: Option<String>,
    },

    /// Server returned a 2xx body that could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Base URL or path could not be turned into a request URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Message supplied by the server, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status for rejections.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
