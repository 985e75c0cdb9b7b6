//! Migration plan configuration.
//!
//! A [`MigrationPlan`] names the repositories to migrate, the destination
//! project and the labels stamped on every story. Plans are either built in
//! code or loaded from a TOML file whose keys use kebab-case:
//!
//! ```toml
//! owner = "acme"
//! repos = ["widgets", "gadgets"]
//! project-id = 99
//! limit = 500
//! marker-label = "github-migrated"
//! repo-label-prefix = "repo/"
//! ```

mod error;
mod plan;

pub use error::ConfigError;
pub use plan::{LabelScheme, MigrationPlan};

use url::Url;

/// Default maximum number of issues fetched per repository.
pub const DEFAULT_LIMIT: usize = 1000;

/// Default label applied to every migrated story.
pub const DEFAULT_MARKER_LABEL: &str = "github-migrated";

/// Default prefix for the per-repository story label.
pub const DEFAULT_REPO_LABEL_PREFIX: &str = "repo/";

/// Parses and checks an HTTP(S) base URL.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUrl`] if the URL does not parse, or
/// [`ConfigError::InvalidValue`] if its scheme is not `http` or `https`.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source: e,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidValue {
            field: "pt-api-url",
            message: format!("unsupported scheme '{other}'"),
        }),
    }
}
