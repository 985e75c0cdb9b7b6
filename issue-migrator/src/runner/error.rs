//! Runner error types.

use crate::config::ConfigError;
use crate::destination::DestinationError;
use crate::sink::SinkError;
use crate::source::SourceError;

/// Errors that stop a migration run.
///
/// Remote failures carry the operation, repository and issue they hit.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration errors, raised before any network call.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// GitHub client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Tracker client initialization errors.
    #[error(transparent)]
    Destination(#[from] DestinationError),

    /// Listing the open issues of a repository failed.
    #[error("failed to list issues for repo: {owner}/{repo}: {source}")]
    ListIssues {
        owner: String,
        repo: String,
        #[source]
        source: SourceError,
    },

    /// Listing the comments of an issue failed.
    #[error("failed to list comments for repo: {owner}/{repo}, issue {number}: {source}")]
    ListComments {
        owner: String,
        repo: String,
        number: u64,
        #[source]
        source: SourceError,
    },

    /// Creating or previewing the story for an issue failed.
    #[error("error creating story for repo: {repo}, issue {number}: {source}")]
    WriteStory {
        repo: String,
        number: u64,
        #[source]
        source: SinkError,
    },

    /// Attaching or previewing a comment failed.
    #[error("error creating comment for repo: {repo}, issue {number}: {source}")]
    WriteComment {
        repo: String,
        number: u64,
        #[source]
        source: SinkError,
    },

    /// Closing the issue after its comments failed.
    #[error("error finishing issue for repo: {repo}, issue {number}: {source}")]
    FinishIssue {
        repo: String,
        number: u64,
        #[source]
        source: SinkError,
    },
}
