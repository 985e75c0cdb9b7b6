//! GitHub-backed [`IssueSource`].

use super::{IssueSource, SourceComment, SourceError, SourceIssue};
use crate::rate_limit::ensure_core_rate_limit;
use octocrab::models::issues::{Comment, Issue};
use octocrab::{params, Octocrab, Page};
use serde::de::DeserializeOwned;
use tracing::{debug, info_span, warn, Instrument};

/// Largest page size GitHub honours.
pub const MAX_PER_PAGE: u8 = 100;

/// Maximum number of comments fetched per issue.
pub const COMMENT_LIMIT: usize = 1000;

/// Reads open issues and their comments through the GitHub REST API.
#[derive(Clone)]
pub struct GitHubSource {
    octocrab: Octocrab,
}

impl GitHubSource {
    /// Builds a client authenticated with `token`.
    ///
    /// An empty token yields an anonymous client, which can only read
    /// public repositories and gets a lower rate limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(token: &str) -> Result<Self, octocrab::Error> {
        let builder = Octocrab::builder();
        let octocrab = if token.is_empty() {
            builder.build()?
        } else {
            builder.personal_token(token.to_string()).build()?
        };
        Ok(Self { octocrab })
    }

    /// Wraps an already configured client.
    #[must_use]
    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Follows `next` links from `first`, keeping items accepted by `keep`,
    /// until `cap` items are collected or the listing ends.
    async fn collect_pages<T, F>(
        &self,
        first: Page<T>,
        cap: usize,
        keep: F,
    ) -> Result<Vec<T>, SourceError>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let mut items: Vec<T> = Vec::new();
        let mut page = first;

        loop {
            let next = page.next.take();
            items.extend(page.items.into_iter().filter(|item| keep(item)));

            if items.len() >= cap {
                if next.is_some() {
                    warn!(cap, "Reached item cap, remaining pages not fetched");
                }
                break;
            }

            ensure_core_rate_limit(&self.octocrab).await?;
            match self.octocrab.get_page::<T>(&next).await? {
                Some(next_page) => page = next_page,
                None => break,
            }
        }

        items.truncate(cap);
        Ok(items)
    }
}

/// Page size for a listing capped at `cap` items.
fn page_size(cap: usize) -> u8 {
    u8::try_from(cap.min(usize::from(MAX_PER_PAGE))).unwrap_or(MAX_PER_PAGE)
}

impl IssueSource for GitHubSource {
    async fn list_open_issues(
        &self,
        owner: &str,
        repo: &str,
        limit: usize,
    ) -> Result<Vec<SourceIssue>, SourceError> {
        let span = info_span!("list_open_issues", owner, repo, limit);

        async {
            ensure_core_rate_limit(&self.octocrab).await?;

            let first = self
                .octocrab
                .issues(owner, repo)
                .list()
                .state(params::State::Open)
                .per_page(page_size(limit))
                .send()
                .await?;

            // GitHub lists pull requests alongside issues.
            let issues = self
                .collect_pages(first, limit, |issue: &Issue| issue.pull_request.is_none())
                .await?;

            debug!(count = issues.len(), "Fetched open issues");
            Ok(issues.into_iter().map(SourceIssue::from).collect())
        }
        .instrument(span)
        .await
    }

    async fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<SourceComment>, SourceError> {
        let span = info_span!("list_comments", owner, repo, issue = number);

        async {
            ensure_core_rate_limit(&self.octocrab).await?;

            let first = self
                .octocrab
                .issues(owner, repo)
                .list_comments(number)
                .per_page(MAX_PER_PAGE)
                .send()
                .await?;

            let comments = self
                .collect_pages(first, COMMENT_LIMIT, |_: &Comment| true)
                .await?;

            debug!(count = comments.len(), "Fetched comments");
            Ok(comments.into_iter().map(SourceComment::from).collect())
        }
        .instrument(span)
        .await
    }
}
