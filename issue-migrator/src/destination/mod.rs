//! Writing stories and comments to the destination service.
//!
//! The pipeline only depends on the [`StoryDestination`] trait;
//! [`TrackerClient`] implements it against the Pivotal Tracker v5 REST API.

mod error;
mod story;
mod tracker;

pub use error::DestinationError;
pub use story::{CommentRequest, Label, Story, StoryComment, StoryRequest, StoryState, StoryType};
pub use tracker::{TrackerClient, TRACKER_API_BASE};

use std::future::Future;

/// Write access to a destination project tracker.
pub trait StoryDestination {
    /// Creates a story in `project_id`.
    fn create_story(
        &self,
        project_id: u64,
        request: &StoryRequest,
    ) -> impl Future<Output = Result<Story, DestinationError>>;

    /// Attaches a comment to story `story_id` in `project_id`.
    fn add_comment(
        &self,
        project_id: u64,
        story_id: u64,
        request: &CommentRequest,
    ) -> impl Future<Output = Result<StoryComment, DestinationError>>;
}
