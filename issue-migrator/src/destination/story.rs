//! Story and comment payloads exchanged with the destination service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of work a story represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryType {
    Feature,
    Bug,
    Chore,
    Release,
}

impl StoryType {
    /// Returns the wire name of the type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Bug => "bug",
            Self::Chore => "chore",
            Self::Release => "release",
        }
    }
}

impl fmt::Display for StoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow state of a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryState {
    Unscheduled,
    Unstarted,
    Planned,
    Started,
    Finished,
    Delivered,
    Accepted,
    Rejected,
}

impl StoryState {
    /// Returns the wire name of the state.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unscheduled => "unscheduled",
            Self::Unstarted => "unstarted",
            Self::Planned => "planned",
            Self::Started => "started",
            Self::Finished => "finished",
            Self::Delivered => "delivered",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for StoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A story label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,
}

impl Label {
    /// Creates a label with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request body for creating a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryRequest {
    /// Story title.
    pub name: String,

    /// Story description, markdown.
    pub description: String,

    /// Labels in the order they were added.
    pub labels: Vec<Label>,

    /// Story type.
    #[serde(rename = "story_type")]
    pub kind: StoryType,

    /// Initial workflow state.
    #[serde(rename = "current_state")]
    pub state: StoryState,
}

impl StoryRequest {
    /// Returns the label names in order.
    #[must_use]
    pub fn label_names(&self) -> Vec<&str> {
        self.labels.iter().map(|label| label.name.as_str()).collect()
    }
}

/// A story created by the destination service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Story {
    /// Service-assigned identifier.
    pub id: u64,

    /// Owning project.
    #[serde(default)]
    pub project_id: Option<u64>,

    /// Story title.
    #[serde(default)]
    pub name: Option<String>,

    /// Web URL of the story.
    #[serde(default)]
    pub url: Option<String>,
}

/// Request body for attaching a comment to a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentRequest {
    /// Comment text, markdown.
    pub text: String,
}

/// A comment created by the destination service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoryComment {
    /// Service-assigned identifier.
    pub id: u64,

    /// Story the comment belongs to.
    #[serde(default)]
    pub story_id: Option<u64>,

    /// Comment text.
    #[serde(default)]
    pub text: Option<String>,
}
