#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod convert;
pub mod destination;
pub mod rate_limit;
pub mod report;
pub mod runner;
pub mod sink;
pub mod source;
pub mod summary;

pub use config::{parse_base_url, ConfigError, LabelScheme, MigrationPlan};
pub use convert::{convert_comment, convert_issue, format_labels, truncate};
pub use destination::{
    CommentRequest, DestinationError, Label, Story, StoryComment, StoryDestination, StoryRequest,
    StoryState, StoryType, TrackerClient,
};
pub use rate_limit::{check_core_rate_limit, ensure_core_rate_limit, RateLimitInfo};
pub use report::Reporter;
pub use runner::{migrate, run_migration, Runner, RunnerConfig, RunnerError};
pub use sink::{DryRunPrinter, MigrationSink, RemoteWriter, SinkError};
pub use source::{GitHubSource, IssueSource, SourceComment, SourceError, SourceIssue};
pub use summary::{IssueOutcome, RunSummary};
