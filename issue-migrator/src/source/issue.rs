//! Issue and comment records read from the source service.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// An open issue fetched from a source repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceIssue {
    /// Repository-scoped issue number.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Issue body, empty when the issue has none.
    pub body: String,

    /// When the issue was opened.
    pub created_at: DateTime<Utc>,

    /// Web URL of the issue.
    pub url: String,

    /// Label names in source order.
    pub labels: Vec<String>,
}

/// A comment on a [`SourceIssue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceComment {
    /// Comment body, empty when the comment has none.
    pub body: String,

    /// Login of the comment author.
    pub author: String,

    /// When the comment was posted.
    pub created_at: DateTime<Utc>,

    /// Web URL of the comment.
    pub url: String,
}

impl From<octocrab::models::issues::Issue> for SourceIssue {
    fn from(issue: octocrab::models::issues::Issue) -> Self {
        Self {
            number: issue.number,
            title: issue.title,
            body: issue.body.unwrap_or_default(),
            created_at: issue.created_at,
            url: issue.html_url.to_string(),
            labels: issue.labels.into_iter().map(|label| label.name).collect(),
        }
    }
}

impl From<octocrab::models::issues::Comment> for SourceComment {
    fn from(comment: octocrab::models::issues::Comment) -> Self {
        Self {
            body: comment.body.unwrap_or_default(),
            author: comment.user.login,
            created_at: comment.created_at,
            url: comment.html_url.to_string(),
        }
    }
}
