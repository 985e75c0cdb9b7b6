//! Where converted records go.
//!
//! A run picks one [`MigrationSink`] up front: [`DryRunPrinter`] shows each
//! record next to its conversion, [`RemoteWriter`] creates it in the
//! destination. The orchestrator drives both the same way.

mod error;
mod printer;
mod remote;

pub use error::SinkError;
pub use printer::DryRunPrinter;
pub use remote::RemoteWriter;

use crate::destination::{CommentRequest, Story, StoryComment, StoryRequest};
use crate::source::{SourceComment, SourceIssue};
use std::future::Future;

/// Receives converted issues and comments.
pub trait MigrationSink {
    /// Whether this sink leaves the destination untouched.
    fn is_dry_run(&self) -> bool;

    /// Handles the converted form of `issue`.
    ///
    /// Returns the created story, or `None` when nothing was created.
    fn write_story(
        &mut self,
        issue: &SourceIssue,
        request: &StoryRequest,
    ) -> impl Future<Output = Result<Option<Story>, SinkError>>;

    /// Handles the converted form of `comment`, attached to `story` if any.
    fn write_comment(
        &mut self,
        story: Option<&Story>,
        comment: &SourceComment,
        request: &CommentRequest,
    ) -> impl Future<Output = Result<Option<StoryComment>, SinkError>>;

    /// Called once all comments of `issue` were handled.
    fn finish_issue(
        &mut self,
        issue: &SourceIssue,
    ) -> impl Future<Output = Result<(), SinkError>> {
        let _ = issue;
        async { Ok(()) }
    }
}
