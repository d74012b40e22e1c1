//! Move oracle: the only source of maze topology.
//!
//! # Responsibilities
//! - Answer whether one in-bounds cell may be entered
//! - Short-circuit out-of-bounds cells locally, without a query
//! - Report fatal answers and downgrade them to "illegal" for the search

use crate::client::{CheckReply, MazeApiClient};
use crate::error::{operation, SolverError};
use crate::maze::types::{MazeDescriptor, MazeId, Position};
use crate::observability::metrics;
use crate::report;
use crate::resilience::RetryPolicy;

/// Verdict for a single cell.
#[derive(Debug)]
pub enum MoveOutcome {
    Legal,
    /// A wall or out-of-bounds cell. Expected; never an error.
    Illegal,
    /// The oracle could not give a trustworthy answer.
    Fatal(SolverError),
}

impl MoveOutcome {
    pub fn is_legal(&self) -> bool {
        matches!(self, MoveOutcome::Legal)
    }

    fn label(&self) -> &'static str {
        match self {
            MoveOutcome::Legal => "legal",
            MoveOutcome::Illegal => "illegal",
            MoveOutcome::Fatal(_) => "fatal",
        }
    }
}

/// Capability answering "may this cell be entered?".
///
/// Implementations only see in-bounds cells when called through
/// [`check_move`].
#[allow(async_fn_in_trait)]
pub trait MoveOracle {
    async fn check_move(&self, pos: Position) -> MoveOutcome;
}

impl<O: MoveOracle + ?Sized> MoveOracle for &O {
    async fn check_move(&self, pos: Position) -> MoveOutcome {
        (**self).check_move(pos).await
    }
}

/// Bounds-check `pos`, then consult `oracle`.
///
/// Returns whether the search may enter the cell. Fatal answers are
/// reported here and count as illegal.
pub async fn check_move<O: MoveOracle>(oracle: &O, maze: &MazeDescriptor, pos: Position) -> bool {
    if !maze.contains(pos) {
        return false;
    }

    let outcome = oracle.check_move(pos).await;
    metrics::record_oracle_query(outcome.label());
    tracing::trace!(x = pos.x, y = pos.y, outcome = outcome.label(), "Oracle verdict");

    match outcome {
        MoveOutcome::Legal => true,
        MoveOutcome::Illegal => false,
        MoveOutcome::Fatal(e) => {
            tracing::error!(x = pos.x, y = pos.y, error = %e, "Oracle failure, treating cell as blocked");
            report::error(&e);
            false
        }
    }
}

/// Oracle backed by the maze service's check endpoint.
pub struct RemoteMoveOracle<'a> {
    api: &'a MazeApiClient,
    retry: RetryPolicy,
    maze_id: &'a MazeId,
}

impl<'a> RemoteMoveOracle<'a> {
    pub fn new(api: &'a MazeApiClient, retry: RetryPolicy, maze_id: &'a MazeId) -> Self {
        Self { api, retry, maze_id }
    }
}

impl MoveOracle for RemoteMoveOracle<'_> {
    async fn check_move(&self, pos: Position) -> MoveOutcome {
        let api = self.api;
        let id = self.maze_id;

        match self
            .retry
            .execute(operation::CHECK_MOVE, || api.check_position(id, pos))
            .await
        {
            Ok(CheckReply::Open(body)) => {
                let expected = pos.confirmation();
                if body == expected {
                    MoveOutcome::Legal
                } else {
                    MoveOutcome::Fatal(SolverError::ProtocolIntegrity {
                        expected,
                        actual: body,
                    })
                }
            }
            Ok(CheckReply::Forbidden) => MoveOutcome::Illegal,
            Err(e) => MoveOutcome::Fatal(SolverError::remote(operation::CHECK_MOVE, e)),
        }
    }
}
