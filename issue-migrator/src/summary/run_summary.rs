//! Run summary types.

use super::result::IssueOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of repositories whose issues were listed.
    pub repositories_processed: usize,

    /// Number of open issues converted.
    pub issues_found: usize,

    /// Number of comments converted.
    pub comments_found: usize,

    /// Number of stories created in the destination.
    pub stories_created: usize,

    /// Number of comments attached in the destination.
    pub comments_added: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with the outcome of one issue.
    pub fn record_issue(&mut self, outcome: &IssueOutcome) {
        self.issues_found += 1;
        match outcome {
            IssueOutcome::Previewed { comments, .. } => {
                self.comments_found += comments;
            }
            IssueOutcome::Migrated { comments, .. } => {
                self.comments_found += comments;
                self.stories_created += 1;
                self.comments_added += comments;
            }
        }
    }
}
