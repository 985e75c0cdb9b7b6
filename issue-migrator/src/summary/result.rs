//! Per-issue outcome types.

/// Result of migrating a single issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueOutcome {
    /// Issue and comments were printed for review only.
    Previewed {
        /// Source issue number.
        number: u64,
        /// Number of comments previewed.
        comments: usize,
    },

    /// Story and comments were written to the destination.
    Migrated {
        /// Source issue number.
        number: u64,
        /// Identifier of the created story.
        story_id: u64,
        /// Number of comments attached.
        comments: usize,
    },
}
