//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client, retries, explorer, session produce:
//!     → logging.rs (structured log events on stderr)
//!     → metrics.rs (counters)
//!
//! Human-readable outcome lines are separate: see report.rs.
//! ```

pub mod logging;
pub mod metrics;
