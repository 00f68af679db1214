//! Unified client error types.

use thiserror::Error;

/// Top-level client error.
#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("{0}")]
    Server(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Coarse classification used at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caught locally, no request was sent.
    Validation,
    /// The request could not be sent or the response could not be decoded.
    Transport,
    /// A well-formed response that signals failure.
    Server,
}

impl ZoneError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Server(_) => ErrorKind::Server,
            Self::Http(HttpError::Rejected { .. }) => ErrorKind::Server,
            Self::Http(_) | Self::Serde(_) => ErrorKind::Transport,
        }
    }

    /// Human-readable message, without the variant prefix.
    ///
    /// This is the text surfaced in the status line and the chart placeholder.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Server(msg) => msg.clone(),
            Self::Http(HttpError::Rejected {
                message: Some(msg), ..
            }) => msg.clone(),
            Self::Http(e) => e.to_string(),
            Self::Serde(e) => e.to_string(),
        }
    }

    /// Convert an HTTP-layer error, turning a rejected response into
    /// [`ZoneError::Server`] with the body's `error` text or `fallback`.
    pub fn from_http(err: HttpError, fallback: &str) -> Self {
        match err {
            HttpError::Rejected { message, .. } => {
                Self::Server(message.unwrap_or_else(|| fallback.to_string()))
            }
            other => Self::Http(other),
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Non-2xx response whose body is not the backend's JSON error shape.
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_with_message_becomes_server_error() {
        let err = ZoneError::from_http(
            HttpError::Rejected {
                status: 400,
                message: Some("bad ticker".to_string()),
            },
            "Failed to analyze stock",
        );
        assert!(matches!(err, ZoneError::Server(ref m) if m == "bad ticker"));
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.user_message(), "bad ticker");
    }

    #[test]
    fn test_rejected_without_message_uses_fallback() {
        let err = ZoneError::from_http(
            HttpError::Rejected {
                status: 500,
                message: None,
            },
            "Failed to upload file",
        );
        assert_eq!(err.user_message(), "Failed to upload file");
    }

    #[test]
    fn test_decode_failure_is_transport() {
        let err = ZoneError::from_http(HttpError::Decode("eof".into()), "unused");
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.user_message(), "Invalid response body: eof");
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = ZoneError::validation("Please enter a ticker symbol");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.user_message(), "Please enter a ticker symbol");
    }
}
