//! Human-readable outcome lines on stdout.

use std::fmt::Display;

use crate::session::SubmissionOutcome;

/// Print an `ERROR:` line.
pub fn error(err: &dyn Display) {
    println!("ERROR: {}", err);
}

/// Print the line for a submission verdict.
pub fn submission(outcome: SubmissionOutcome) {
    match outcome {
        SubmissionOutcome::Accepted => println!("Success!"),
        SubmissionOutcome::Rejected => error(&crate::error::SolverError::RejectedSolution),
    }
}
