//! Blind maze solver library.
//!
//! Solves a maze whose layout is only available through a remote service
//! answering one "may I enter (x, y)?" query at a time.

pub mod client;
pub mod config;
pub mod error;
pub mod maze;
pub mod observability;
pub mod report;
pub mod resilience;
pub mod session;

pub use config::SolverConfig;
pub use error::{SolverError, SolverResult};
pub use session::{run, MazeSession, SubmissionOutcome};
