//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Remote call (create maze, check move, submit solution):
//!     → client timeouts (connect/request, set on the HTTP client)
//!     → On failure: retries.rs (transient? re-invoke within budget)
//!     → Terminal failure surfaces to the caller unchanged
//! ```

pub mod retries;

pub use retries::{RetryPolicy, Retryable};
