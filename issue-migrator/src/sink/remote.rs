//! Live sink.

use super::{MigrationSink, SinkError};
use crate::destination::{CommentRequest, Story, StoryComment, StoryDestination, StoryRequest};
use crate::source::{SourceComment, SourceIssue};
use tracing::info;

/// Creates stories and comments in a destination project.
#[derive(Debug)]
pub struct RemoteWriter<'a, D> {
    destination: &'a D,
    project_id: u64,
}

impl<'a, D: StoryDestination> RemoteWriter<'a, D> {
    /// Creates a writer targeting `project_id` through `destination`.
    pub fn new(destination: &'a D, project_id: u64) -> Self {
        Self {
            destination,
            project_id,
        }
    }
}

impl<D: StoryDestination> MigrationSink for RemoteWriter<'_, D> {
    fn is_dry_run(&self) -> bool {
        false
    }

    async fn write_story(
        &mut self,
        issue: &SourceIssue,
        request: &StoryRequest,
    ) -> Result<Option<Story>, SinkError> {
        let story = self
            .destination
            .create_story(self.project_id, request)
            .await?;
        info!(issue = issue.number, story_id = story.id, "Story created");
        Ok(Some(story))
    }

    async fn write_comment(
        &mut self,
        story: Option<&Story>,
        _comment: &SourceComment,
        request: &CommentRequest,
    ) -> Result<Option<StoryComment>, SinkError> {
        let story = story.ok_or(SinkError::MissingStory)?;
        let comment = self
            .destination
            .add_comment(self.project_id, story.id, request)
            .await?;
        Ok(Some(comment))
    }
}
