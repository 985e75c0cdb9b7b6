//! Conversion of source records into destination requests.
//!
//! Converted text starts with a provenance block, fenced so the tracker
//! renders it as preformatted text, followed by the untouched original body:
//!
//! ~~~text
//! https://github.com/acme/widgets/issues/42
//! ```
//! Migrated from Github
//! Created: 2024-03-01 12:00:00 UTC
//! Labels: ["bug"]
//! ```
//!
//! steps...
//! ~~~

use crate::config::LabelScheme;
use crate::destination::{CommentRequest, Label, StoryRequest, StoryState, StoryType};
use crate::source::{SourceComment, SourceIssue};

/// Number of characters kept by [`truncate`].
pub const DISPLAY_LIMIT: usize = 255;

/// Story type given to every migrated issue.
pub const MIGRATED_STORY_TYPE: StoryType = StoryType::Feature;

/// Initial state of every migrated story.
pub const MIGRATED_STORY_STATE: StoryState = StoryState::Unscheduled;

/// Converts an issue of `repo` into a story creation request.
#[must_use]
pub fn convert_issue(repo: &str, issue: &SourceIssue, labels: &LabelScheme) -> StoryRequest {
    let description = format!(
        "{url}\n```\nMigrated from Github\nCreated: {created}\nLabels: {labels}\n```\n\n{body}",
        url = issue.url,
        created = issue.created_at,
        labels = format_labels(&issue.labels),
        body = issue.body,
    );

    StoryRequest {
        name: issue.title.clone(),
        description,
        labels: vec![
            Label::new(labels.marker.clone()),
            Label::new(labels.repo_label(repo)),
        ],
        kind: MIGRATED_STORY_TYPE,
        state: MIGRATED_STORY_STATE,
    }
}

/// Converts an issue comment into a story comment request.
#[must_use]
pub fn convert_comment(comment: &SourceComment) -> CommentRequest {
    let text = format!(
        "{url}\n```\nMigrated from Github\nCreated: {created}\nAuthor: {author}\n```\n\n{body}",
        url = comment.url,
        created = comment.created_at,
        author = comment.author,
        body = comment.body,
    );

    CommentRequest { text }
}

/// Renders label names as a quoted list, e.g. `["bug", "ui"]`.
#[must_use]
pub fn format_labels<S: AsRef<str>>(labels: &[S]) -> String {
    let quoted: Vec<String> = labels
        .iter()
        .map(|label| format!("{:?}", label.as_ref()))
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Returns the first [`DISPLAY_LIMIT`] characters of `text`.
///
/// Counts characters, not bytes. For display only; converted requests always
/// carry the full text.
#[must_use]
pub fn truncate(text: &str) -> &str {
    match text.char_indices().nth(DISPLAY_LIMIT) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
