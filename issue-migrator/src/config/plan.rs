//! Migration plan definition and loading.

use super::{ConfigError, DEFAULT_LIMIT, DEFAULT_MARKER_LABEL, DEFAULT_REPO_LABEL_PREFIX};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// What to migrate: source repositories, destination project and labelling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct MigrationPlan {
    /// Account or organization owning the source repositories.
    #[serde(default)]
    pub owner: String,

    /// Repository names, migrated in this order.
    #[serde(default)]
    pub repos: Vec<String>,

    /// Destination project identifier.
    #[serde(default)]
    pub project_id: u64,

    /// Maximum number of issues fetched per repository.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Label applied to every migrated story.
    #[serde(default = "default_marker_label")]
    pub marker_label: String,

    /// Prefix of the label naming the source repository.
    #[serde(default = "default_repo_label_prefix")]
    pub repo_label_prefix: String,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_marker_label() -> String {
    DEFAULT_MARKER_LABEL.to_string()
}

fn default_repo_label_prefix() -> String {
    DEFAULT_REPO_LABEL_PREFIX.to_string()
}

impl Default for MigrationPlan {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repos: Vec::new(),
            project_id: 0,
            limit: DEFAULT_LIMIT,
            marker_label: default_marker_label(),
            repo_label_prefix: default_repo_label_prefix(),
        }
    }
}

/// Labels stamped on each converted story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelScheme {
    /// Label shared by every migrated story.
    pub marker: String,
    /// Prefix joined with the repository name.
    pub repo_prefix: String,
}

impl LabelScheme {
    /// Returns the label naming `repo`.
    #[must_use]
    pub fn repo_label(&self, repo: &str) -> String {
        format!("{}{}", self.repo_prefix, repo)
    }
}

impl Default for LabelScheme {
    fn default() -> Self {
        Self {
            marker: default_marker_label(),
            repo_prefix: default_repo_label_prefix(),
        }
    }
}

impl MigrationPlan {
    /// Creates a plan for `repos` owned by `owner`, with default limit and labels.
    pub fn new(owner: impl Into<String>, repos: Vec<String>, project_id: u64) -> Self {
        Self {
            owner: owner.into(),
            repos,
            project_id,
            ..Self::default()
        }
    }

    /// Loads a plan from a TOML file.
    ///
    /// Missing keys fall back to their defaults; the result is not validated
    /// so that command-line values can still fill in the gaps.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable or not a
    /// valid plan.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading migration plan");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Checks the plan is complete enough to start a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRepositories`] when no repository is listed,
    /// [`ConfigError::MissingOwner`] when the owner is blank, and
    /// [`ConfigError::InvalidValue`] for blank repository names, a zero limit
    /// or a blank marker label.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repos.is_empty() {
            return Err(ConfigError::EmptyRepositories);
        }

        if self.owner.trim().is_empty() {
            return Err(ConfigError::MissingOwner);
        }

        if self.repos.iter().any(|repo| repo.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "repos",
                message: "repository names must not be empty".to_string(),
            });
        }

        if self.limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "limit",
                message: "must be greater than zero".to_string(),
            });
        }

        if self.marker_label.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "marker-label",
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the labels to stamp on converted stories.
    #[must_use]
    pub fn label_scheme(&self) -> LabelScheme {
        LabelScheme {
            marker: self.marker_label.clone(),
            repo_prefix: self.repo_label_prefix.clone(),
        }
    }
}
