//! Reading issues and comments from the source service.
//!
//! The pipeline only depends on the [`IssueSource`] trait; [`GitHubSource`]
//! is the implementation backed by the GitHub REST API.

mod error;
mod github;
mod issue;

pub use error::SourceError;
pub use github::{GitHubSource, COMMENT_LIMIT, MAX_PER_PAGE};
pub use issue::{SourceComment, SourceIssue};

use std::future::Future;

/// Read access to a source issue tracker.
pub trait IssueSource {
    /// Lists at most `limit` open issues of `owner/repo`, in service order.
    fn list_open_issues(
        &self,
        owner: &str,
        repo: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<SourceIssue>, SourceError>>;

    /// Lists the comments of issue `number` in `owner/repo`, oldest first.
    fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> impl Future<Output = Result<Vec<SourceComment>, SourceError>>;
}
