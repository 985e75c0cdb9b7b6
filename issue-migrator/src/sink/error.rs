//! Sink error types.

use crate::destination::DestinationError;
use thiserror::Error;

/// Errors that can occur while emitting a converted record.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The destination service call failed.
    #[error(transparent)]
    Destination(#[from] DestinationError),

    /// Writing the preview failed.
    #[error("Failed to write preview: {0}")]
    Output(#[from] std::io::Error),

    /// A comment reached a live sink before its story existed.
    #[error("no story was created for this issue")]
    MissingStory,
}
