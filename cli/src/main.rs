//! CLI for the issue migrator.
//!
//! Moves the open issues of GitHub repositories, with their comments, into a
//! Pivotal Tracker project. Runs are dry unless `--dry-run=false` is given.

use clap::{ArgAction, Parser};
use issue_migrator::{
    parse_base_url, ConfigError, MigrationPlan, Reporter, RunSummary, Runner, RunnerConfig,
    RunnerError,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue Migrator - Copy open GitHub issues and comments into Pivotal Tracker stories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML plan file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Owner of the GitHub repositories to migrate.
    #[arg(long)]
    owner: Option<String>,

    /// GitHub repositories to migrate, comma separated or repeated.
    #[arg(long, value_delimiter = ',')]
    repos: Vec<String>,

    /// GitHub API access token; leave empty for public repositories.
    #[arg(long, env = "GITHUB_TOKEN", default_value = "", hide_env_values = true)]
    gh_token: String,

    /// Pivotal Tracker API access token.
    #[arg(long, env = "PIVOTAL_TOKEN", default_value = "", hide_env_values = true)]
    pt_token: String,

    /// Pivotal Tracker project ID.
    #[arg(long)]
    pt_proj_id: Option<u64>,

    /// Pivotal Tracker API base URL.
    #[arg(long)]
    pt_api_url: Option<String>,

    /// Maximum number of issues to migrate per repository.
    #[arg(long)]
    limit: Option<usize>,

    /// Print the actions that would be taken instead of creating stories.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    // Both HTTP stacks share one rustls provider; ignore an earlier install.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            if let Err(e) = Reporter::stdout().write_summary(&summary) {
                error!(error = %e, "Failed to print summary");
                return ExitCode::from(1);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Migration aborted");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with compact single-line output on
/// stderr and log level filtering via `RUST_LOG` (defaults to "info"). Stdout
/// carries only previews and the summary.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let plan = build_plan(&args)?;
    let mut config = RunnerConfig::new(plan, args.gh_token, args.pt_token, args.dry_run)?;
    if let Some(url) = &args.pt_api_url {
        config = config.with_tracker_api_url(parse_base_url(url)?);
    }

    let runner = Runner::new(config)?;
    runner.run().await
}

/// Merges the optional plan file with command-line values.
fn build_plan(args: &Args) -> Result<MigrationPlan, ConfigError> {
    let mut plan = match &args.config {
        Some(path) => MigrationPlan::load(path)?,
        None => MigrationPlan::default(),
    };

    if let Some(owner) = &args.owner {
        plan.owner = owner.clone();
    }
    if !args.repos.is_empty() {
        plan.repos = args.repos.clone();
    }
    if let Some(project_id) = args.pt_proj_id {
        plan.project_id = project_id;
    }
    if let Some(limit) = args.limit {
        plan.limit = limit;
    }

    Ok(plan)
}
