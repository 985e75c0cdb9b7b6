//! Human-readable previews and run summaries.

use crate::convert::{format_labels, truncate};
use crate::destination::{CommentRequest, StoryRequest};
use crate::source::{SourceComment, SourceIssue};
use crate::summary::RunSummary;
use std::io::{self, Write};

/// Writes fixed-format blocks for auditing a migration.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    /// Creates a reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Opens the preview of one issue.
    pub fn begin_issue(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n===== begin =====")
    }

    /// Closes the preview of one issue.
    pub fn end_issue(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n===== end =====")
    }

    /// Writes a source issue.
    pub fn write_issue(&mut self, issue: &SourceIssue) -> io::Result<()> {
        writeln!(self.out, "\n--- issue ---")?;
        writeln!(self.out, "Number: {}", issue.number)?;
        writeln!(self.out, "Title: {}", issue.title)?;
        writeln!(self.out, "URL: {}", issue.url)?;
        writeln!(self.out, "Created: {}", issue.created_at)?;
        writeln!(self.out, "Labels: {}", format_labels(&issue.labels))?;
        writeln!(self.out, "--- /issue ---")
    }

    /// Writes a converted story, description truncated.
    pub fn write_story(&mut self, story: &StoryRequest) -> io::Result<()> {
        writeln!(self.out, "\n--- story ---")?;
        writeln!(self.out, "Name: {}", story.name)?;
        writeln!(self.out, "Description: {}", truncate(&story.description))?;
        writeln!(self.out, "Type: {}", story.kind)?;
        writeln!(self.out, "State: {}", story.state)?;
        writeln!(self.out, "Labels: {}", format_labels(&story.label_names()))?;
        writeln!(self.out, "--- /story ---")
    }

    /// Writes a source comment, body truncated.
    pub fn write_issue_comment(&mut self, comment: &SourceComment) -> io::Result<()> {
        writeln!(self.out, "\n--- issue comment ---")?;
        writeln!(self.out, "Author: {}", comment.author)?;
        writeln!(self.out, "Created: {}", comment.created_at)?;
        writeln!(self.out, "Body: {}", truncate(&comment.body))?;
        writeln!(self.out, "--- /issue comment ---")
    }

    /// Writes a converted comment, text truncated.
    pub fn write_story_comment(&mut self, comment: &CommentRequest) -> io::Result<()> {
        writeln!(self.out, "\n--- story comment ---")?;
        writeln!(self.out, "Text: {}", truncate(&comment.text))?;
        writeln!(self.out, "--- /story comment ---")
    }

    /// Writes the end-of-run summary.
    pub fn write_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out, "\nSummary:")?;
        writeln!(
            self.out,
            "  Mode: {}",
            if summary.dry_run { "Dry Run" } else { "Live" }
        )?;
        writeln!(
            self.out,
            "  Repositories processed: {}",
            summary.repositories_processed
        )?;
        writeln!(self.out, "  Issues found: {}", summary.issues_found)?;
        writeln!(self.out, "  Comments found: {}", summary.comments_found)?;

        if !summary.dry_run {
            writeln!(self.out, "  Stories created: {}", summary.stories_created)?;
            writeln!(self.out, "  Comments added: {}", summary.comments_added)?;
        }
        writeln!(self.out, "Finished.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LabelScheme;
    use crate::convert::{convert_comment, convert_issue};
    use chrono::{TimeZone, Utc};

    fn sample_issue() -> SourceIssue {
        SourceIssue {
            number: 42,
            title: "Bug: crash on load".to_string(),
            body: "x".repeat(400),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            url: "https://github.com/acme/widgets/issues/42".to_string(),
            labels: vec!["bug".to_string()],
        }
    }

    fn render(f: impl FnOnce(&mut Reporter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut reporter = Reporter::new(Vec::new());
        f(&mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn issue_block_lists_fields() {
        let output = render(|r| r.write_issue(&sample_issue()));

        assert_eq!(
            output,
            "\n--- issue ---\nNumber: 42\nTitle: Bug: crash on load\n\
             URL: https://github.com/acme/widgets/issues/42\n\
             Created: 2024-03-01 12:00:00 UTC\nLabels: [\"bug\"]\n--- /issue ---\n"
        );
    }

    #[test]
    fn story_block_truncates_description() {
        let story = convert_issue("widgets", &sample_issue(), &LabelScheme::default());
        let output = render(|r| r.write_story(&story));

        let description = output
            .lines()
            .find_map(|line| line.strip_prefix("Description: "))
            .unwrap();
        assert_eq!(description, "https://github.com/acme/widgets/issues/42");
        assert!(output.contains("Type: feature\n"));
        assert!(output.contains("State: unscheduled\n"));
        assert!(output.contains("Labels: [\"github-migrated\", \"repo/widgets\"]\n"));
        assert!(!output.contains(&"x".repeat(300)));
    }

    #[test]
    fn comment_blocks_truncate_text() {
        let comment = SourceComment {
            body: "y".repeat(300),
            author: "alice".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 2, 8, 30, 0).unwrap(),
            url: "https://github.com/acme/widgets/issues/42#issuecomment-1".to_string(),
        };
        let request = convert_comment(&comment);

        let output = render(|r| {
            r.write_issue_comment(&comment)?;
            r.write_story_comment(&request)
        });

        assert!(output.contains("Author: alice\n"));
        assert!(output.contains(&format!("Body: {}\n", "y".repeat(255))));
        assert!(output.contains("--- /story comment ---"));
    }

    #[test]
    fn dry_run_summary_omits_write_counts() {
        let mut summary = RunSummary::new(true);
        summary.repositories_processed = 1;
        summary.issues_found = 3;

        let output = render(|r| r.write_summary(&summary));

        assert!(output.contains("Mode: Dry Run"));
        assert!(output.contains("Issues found: 3"));
        assert!(!output.contains("Stories created"));
        assert!(output.ends_with("Finished.\n"));
    }

    #[test]
    fn live_summary_includes_write_counts() {
        let mut summary = RunSummary::new(false);
        summary.stories_created = 2;
        summary.comments_added = 5;

        let output = render(|r| r.write_summary(&summary));

        assert!(output.contains("Mode: Live"));
        assert!(output.contains("Stories created: 2"));
        assert!(output.contains("Comments added: 5"));
    }
}
