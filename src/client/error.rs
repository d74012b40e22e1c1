//! Classification of a single exchange with the maze service.

use thiserror::Error;

use crate::resilience::Retryable;

/// Errors that can occur during one remote call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service asked for the request to be repeated.
    #[error("code {0}")]
    Transient(u16),

    /// Any status with no meaning for the operation.
    #[error("code {0}")]
    Status(u16),

    /// Connection, timeout, or body read failure.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body could not be decoded.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// An endpoint URL could not be built.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A maze id that cannot stand as one path segment.
    #[error("maze id {0:?} cannot be placed in an endpoint path")]
    UnroutableId(String),
}

impl ApiError {
    /// HTTP status carried by the error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transient(code) | ApiError::Status(code) => Some(*code),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) | ApiError::InvalidUrl(_) | ApiError::UnroutableId(_) => None,
        }
    }
}

impl Retryable for ApiError {
    fn is_transient(&self) -> bool {
        matches!(self, ApiError::Transient(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transient_is_retryable() {
        assert!(ApiError::Transient(503).is_transient());
        assert!(!ApiError::Status(500).is_transient());
        assert!(!ApiError::Decode("x".into()).is_transient());
    }

    #[test]
    fn test_status_display_matches_report_format() {
        assert_eq!(ApiError::Status(500).to_string(), "code 500");
        assert_eq!(ApiError::Transient(503).status(), Some(503));
    }
}
