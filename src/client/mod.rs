//! Maze service transport.
//!
//! # Data Flow
//! ```text
//! session / remote oracle
//!     → api.rs (one HTTP exchange, status classified per operation)
//!     → error.rs (transient vs terminal)
//!     → resilience::retries re-invokes on transient
//! ```

pub mod api;
pub mod error;

pub use api::{CheckReply, MazeApiClient, SubmitReply};
pub use error::ApiError;
