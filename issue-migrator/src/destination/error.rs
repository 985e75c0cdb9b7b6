//! Destination service error types.

use thiserror::Error;

/// Errors that can occur while writing to the destination service.
#[derive(Debug, Error)]
pub enum DestinationError {
    /// Transport or decoding failure.
    #[error("Tracker request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Tracker rejected {operation} with status {status}: {body}")]
    Rejected {
        operation: &'static str,
        status: u16,
        body: String,
    },
}
