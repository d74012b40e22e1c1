//! Run-level error taxonomy.

use thiserror::Error;

use crate::client::ApiError;
use crate::config::ConfigError;

/// Operation names used in reports and metrics.
pub mod operation {
    pub const CREATE_MAZE: &str = "getting maze";
    pub const CHECK_MOVE: &str = "checking move";
    pub const SUBMIT_SOLUTION: &str = "submitting solution";
}

/// Errors that end a solver run (or, for oracle faults, a search branch).
#[derive(Debug, Error)]
pub enum SolverError {
    /// A remote call failed terminally, including exhausted retries.
    #[error("Error returned while {operation} with {source}")]
    Remote {
        operation: &'static str,
        #[source]
        source: ApiError,
    },

    /// The oracle confirmed a cell but echoed a different one.
    #[error("Error returned while checking move: expected {expected:?}, service echoed {actual:?}")]
    ProtocolIntegrity { expected: String, actual: String },

    /// Entry or exit unreachable, or nonsensical dimensions.
    #[error("We have an invalid maze :/")]
    InvalidMaze(String),

    /// The service refused the submitted path.
    #[error("Oh no, we messed up! Wrong solution submitted")]
    RejectedSolution,

    /// No path found and empty submissions are disabled.
    #[error("No path connects the entry and the exit; nothing submitted")]
    NoPathFound,

    /// The HTTP client could not be constructed.
    #[error("Failed to initialise the maze API client: {0}")]
    ClientSetup(#[source] ApiError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SolverError {
    pub fn remote(operation: &'static str, source: ApiError) -> Self {
        SolverError::Remote { operation, source }
    }

    /// HTTP status behind a remote failure, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            SolverError::Remote { source, .. } | SolverError::ClientSetup(source) => source.status(),
            _ => None,
        }
    }
}

/// Convenience alias for solver results.
pub type SolverResult<T> = Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message() {
        let err = SolverError::remote(operation::SUBMIT_SOLUTION, ApiError::Status(500));
        assert_eq!(
            err.to_string(),
            "Error returned while submitting solution with code 500"
        );
    }

    #[test]
    fn test_exhausted_retry_message_names_transient_code() {
        let err = SolverError::remote(operation::CREATE_MAZE, ApiError::Transient(503));
        assert_eq!(err.to_string(), "Error returned while getting maze with code 503");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_non_remote_errors_carry_no_status() {
        assert_eq!(SolverError::RejectedSolution.status(), None);
        assert_eq!(SolverError::InvalidMaze("exit blocked".into()).status(), None);
        let decode = SolverError::remote(operation::CREATE_MAZE, ApiError::Decode("eof".into()));
        assert_eq!(decode.status(), None);
    }
}
