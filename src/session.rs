//! Maze session: acquire a maze, explore it, submit the result.
//!
//! # Data Flow
//! ```text
//! run(config)
//!     → MazeSession::acquire (create maze, retried on transient)
//!     → MazeSession::solve  (MazeExplorer over RemoteMoveOracle)
//!     → MazeSession::submit (solve endpoint, retried on transient)
//! ```
//!
//! A session only exists once a maze was acquired, so nothing can be
//! submitted after a failed acquisition.

use crate::client::{MazeApiClient, SubmitReply};
use crate::config::SolverConfig;
use crate::error::{operation, SolverError, SolverResult};
use crate::maze::explorer::MazeExplorer;
use crate::maze::oracle::RemoteMoveOracle;
use crate::maze::types::{MazeDescriptor, MazePath};
use crate::resilience::RetryPolicy;

/// Verdict on a submitted path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected,
}

/// One acquired maze and the client used to work on it.
pub struct MazeSession {
    api: MazeApiClient,
    retry: RetryPolicy,
    descriptor: MazeDescriptor,
}

impl MazeSession {
    /// Ask the service for a new maze.
    pub async fn acquire(api: MazeApiClient, retry: RetryPolicy) -> SolverResult<Self> {
        let descriptor = retry
            .execute(operation::CREATE_MAZE, || api.create_maze())
            .await
            .map_err(|e| SolverError::remote(operation::CREATE_MAZE, e))?;

        tracing::info!(
            maze_id = %descriptor.id,
            height = descriptor.height,
            width = descriptor.width,
            "Maze acquired"
        );

        Ok(Self {
            api,
            retry,
            descriptor,
        })
    }

    pub fn descriptor(&self) -> &MazeDescriptor {
        &self.descriptor
    }

    /// Oracle answering move checks for this maze.
    pub fn oracle(&self) -> RemoteMoveOracle<'_> {
        RemoteMoveOracle::new(&self.api, self.retry, &self.descriptor.id)
    }

    /// Explore the maze through the remote oracle.
    pub async fn solve(&self) -> SolverResult<MazePath> {
        MazeExplorer::new(&self.descriptor, self.oracle()).solve().await
    }

    /// Submit `path`; a 422 is a rejection, not a failure.
    pub async fn submit(&self, path: &MazePath) -> SolverResult<SubmissionOutcome> {
        let api = &self.api;
        let id = &self.descriptor.id;

        tracing::info!(maze_id = %id, length = path.len(), "Submitting solution");

        let reply = self
            .retry
            .execute(operation::SUBMIT_SOLUTION, || api.submit_solution(id, path))
            .await
            .map_err(|e| SolverError::remote(operation::SUBMIT_SOLUTION, e))?;

        Ok(match reply {
            SubmitReply::Accepted => SubmissionOutcome::Accepted,
            SubmitReply::Rejected => {
                tracing::warn!(maze_id = %id, "Solution rejected");
                SubmissionOutcome::Rejected
            }
        })
    }
}

/// Acquire, solve, and submit one maze.
pub async fn run(config: &SolverConfig) -> SolverResult<SubmissionOutcome> {
    let api = MazeApiClient::new(
        &config.api,
        config.credentials.clone(),
        config.retries.transient_status,
    )
    .map_err(SolverError::ClientSetup)?;
    let retry = RetryPolicy::from_config(&config.retries);

    let session = MazeSession::acquire(api, retry).await?;
    let path = session.solve().await?;

    if path.is_empty() {
        if !config.solver.submit_empty_path {
            return Err(SolverError::NoPathFound);
        }
        tracing::warn!(maze_id = %session.descriptor().id, "No path found, submitting empty solution");
    }

    session.submit(&path).await
}
