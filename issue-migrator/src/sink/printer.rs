//! Dry-run sink.

use super::{MigrationSink, SinkError};
use crate::destination::{CommentRequest, Story, StoryComment, StoryRequest};
use crate::report::Reporter;
use crate::source::{SourceComment, SourceIssue};
use std::io::Write;

/// Prints each record next to its conversion and never writes remotely.
#[derive(Debug)]
pub struct DryRunPrinter<W: Write> {
    reporter: Reporter<W>,
}

impl<W: Write> DryRunPrinter<W> {
    /// Creates a printer writing through `reporter`.
    pub fn new(reporter: Reporter<W>) -> Self {
        Self { reporter }
    }
}

impl<W: Write> MigrationSink for DryRunPrinter<W> {
    fn is_dry_run(&self) -> bool {
        true
    }

    async fn write_story(
        &mut self,
        issue: &SourceIssue,
        request: &StoryRequest,
    ) -> Result<Option<Story>, SinkError> {
        self.reporter.begin_issue()?;
        self.reporter.write_issue(issue)?;
        self.reporter.write_story(request)?;
        Ok(None)
    }

    async fn write_comment(
        &mut self,
        _story: Option<&Story>,
        comment: &SourceComment,
        request: &CommentRequest,
    ) -> Result<Option<StoryComment>, SinkError> {
        self.reporter.write_issue_comment(comment)?;
        self.reporter.write_story_comment(request)?;
        Ok(None)
    }

    async fn finish_issue(&mut self, _issue: &SourceIssue) -> Result<(), SinkError> {
        self.reporter.end_issue()?;
        Ok(())
    }
}
