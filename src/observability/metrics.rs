//! Metrics collection.
//!
//! # Metrics
//! - `maze_api_requests_total` (counter): remote calls by operation, status
//! - `maze_api_retries_total` (counter): retries by operation
//! - `maze_oracle_queries_total` (counter): oracle verdicts by outcome
//!
//! No exporter is installed here; the counters are no-ops until an
//! embedding application installs a recorder.

/// Record one completed remote call.
pub fn record_request(operation: &'static str, status: u16) {
    metrics::counter!(
        "maze_api_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record a retry scheduled by the retry policy.
pub fn record_retry(operation: &'static str) {
    metrics::counter!("maze_api_retries_total", "operation" => operation).increment(1);
}

/// Record one oracle verdict.
pub fn record_oracle_query(outcome: &'static str) {
    metrics::counter!("maze_oracle_queries_total", "outcome" => outcome).increment(1);
}
