//! Orchestrates a migration run.
//!
//! Repositories are handled in the order listed, issues and comments in the
//! order the source returns them, one request at a time. Each issue runs
//! convert → write story → list comments → (convert → write comment)*; the
//! first error anywhere ends the run and nothing already created is undone.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::MigrationPlan;
use crate::convert::{convert_comment, convert_issue};
use crate::destination::{StoryDestination, TrackerClient};
use crate::report::Reporter;
use crate::sink::{DryRunPrinter, MigrationSink, RemoteWriter};
use crate::source::{GitHubSource, IssueSource, SourceIssue};
use crate::summary::{IssueOutcome, RunSummary};
use std::io::Write;
use tracing::{debug, info, info_span, Instrument};

/// Runs a full migration with clients built from a [`RunnerConfig`].
pub struct Runner {
    config: RunnerConfig,
    source: GitHubSource,
    destination: TrackerClient,
}

impl Runner {
    /// Validates the configuration and builds both clients.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] for an incomplete configuration, or a
    /// client error if either HTTP client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        let source = GitHubSource::new(config.github_token())?;
        let destination = TrackerClient::new(config.tracker_token(), config.tracker_api_url())?;
        Ok(Self {
            config,
            source,
            destination,
        })
    }

    /// Executes the run, printing previews to standard output in dry-run mode.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        run_migration(
            self.config.plan(),
            self.config.dry_run(),
            &self.source,
            &self.destination,
            std::io::stdout(),
        )
        .await
    }
}

/// Picks the sink for the mode once, then migrates every repository.
///
/// In dry-run mode previews go to `out` and `destination` is never called.
pub async fn run_migration<S, D, W>(
    plan: &MigrationPlan,
    dry_run: bool,
    source: &S,
    destination: &D,
    out: W,
) -> Result<RunSummary, RunnerError>
where
    S: IssueSource,
    D: StoryDestination,
    W: Write,
{
    if dry_run {
        let mut sink = DryRunPrinter::new(Reporter::new(out));
        migrate(plan, source, &mut sink).await
    } else {
        let mut sink = RemoteWriter::new(destination, plan.project_id);
        migrate(plan, source, &mut sink).await
    }
}

/// Migrates every repository of `plan` from `source` into `sink`.
///
/// # Errors
///
/// Returns [`RunnerError::Config`] before any request if the plan is invalid,
/// otherwise the first source or sink failure.
pub async fn migrate<S, K>(
    plan: &MigrationPlan,
    source: &S,
    sink: &mut K,
) -> Result<RunSummary, RunnerError>
where
    S: IssueSource,
    K: MigrationSink,
{
    plan.validate()?;

    let mut summary = RunSummary::new(sink.is_dry_run());
    for repo in &plan.repos {
        let span = info_span!("repository", owner = %plan.owner, repo = %repo);
        migrate_repository(plan, repo, source, sink, &mut summary)
            .instrument(span)
            .await?;
    }

    info!(
        repositories = summary.repositories_processed,
        issues = summary.issues_found,
        "Finished"
    );
    Ok(summary)
}

async fn migrate_repository<S, K>(
    plan: &MigrationPlan,
    repo: &str,
    source: &S,
    sink: &mut K,
    summary: &mut RunSummary,
) -> Result<(), RunnerError>
where
    S: IssueSource,
    K: MigrationSink,
{
    info!("Analysing repo: {}/{}", plan.owner, repo);

    let issues = source
        .list_open_issues(&plan.owner, repo, plan.limit)
        .await
        .map_err(|e| RunnerError::ListIssues {
            owner: plan.owner.clone(),
            repo: repo.to_string(),
            source: e,
        })?;

    info!(count = issues.len(), "Found issues to migrate");
    summary.repositories_processed += 1;

    for issue in &issues {
        let span = info_span!("issue", number = issue.number);
        let outcome = migrate_issue(plan, repo, issue, source, sink)
            .instrument(span)
            .await?;
        log_outcome(&outcome);
        summary.record_issue(&outcome);
    }

    Ok(())
}

async fn migrate_issue<S, K>(
    plan: &MigrationPlan,
    repo: &str,
    issue: &SourceIssue,
    source: &S,
    sink: &mut K,
) -> Result<IssueOutcome, RunnerError>
where
    S: IssueSource,
    K: MigrationSink,
{
    let request = convert_issue(repo, issue, &plan.label_scheme());
    let story = sink
        .write_story(issue, &request)
        .await
        .map_err(|e| RunnerError::WriteStory {
            repo: repo.to_string(),
            number: issue.number,
            source: e,
        })?;

    let comments = source
        .list_comments(&plan.owner, repo, issue.number)
        .await
        .map_err(|e| RunnerError::ListComments {
            owner: plan.owner.clone(),
            repo: repo.to_string(),
            number: issue.number,
            source: e,
        })?;

    info!(count = comments.len(), "Found comments for issue");

    for comment in &comments {
        let request = convert_comment(comment);
        sink.write_comment(story.as_ref(), comment, &request)
            .await
            .map_err(|e| RunnerError::WriteComment {
                repo: repo.to_string(),
                number: issue.number,
                source: e,
            })?;
    }

    sink.finish_issue(issue)
        .await
        .map_err(|e| RunnerError::FinishIssue {
            repo: repo.to_string(),
            number: issue.number,
            source: e,
        })?;

    Ok(match story {
        Some(story) => IssueOutcome::Migrated {
            number: issue.number,
            story_id: story.id,
            comments: comments.len(),
        },
        None => IssueOutcome::Previewed {
            number: issue.number,
            comments: comments.len(),
        },
    })
}

fn log_outcome(outcome: &IssueOutcome) {
    match outcome {
        IssueOutcome::Migrated {
            number,
            story_id,
            comments,
        } => info!(issue = number, story_id, comments, "Issue migrated"),
        IssueOutcome::Previewed { number, comments } => {
            debug!(issue = number, comments, "Issue previewed")
        }
    }
}
