//! Runner configuration.

use crate::config::{parse_base_url, ConfigError, MigrationPlan};
use crate::destination::TRACKER_API_BASE;
use url::Url;

/// Everything a run needs: the plan, credentials and mode.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// What to migrate.
    plan: MigrationPlan,
    /// GitHub token; empty means anonymous access.
    github_token: String,
    /// Pivotal Tracker token.
    tracker_token: String,
    /// Pivotal Tracker API base URL.
    tracker_api_url: Url,
    /// Whether to preview instead of writing to the destination.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the built-in Tracker URL fails to parse.
    pub fn new(
        plan: MigrationPlan,
        github_token: String,
        tracker_token: String,
        dry_run: bool,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            plan,
            github_token,
            tracker_token,
            tracker_api_url: parse_base_url(TRACKER_API_BASE)?,
            dry_run,
        })
    }

    /// Sets a custom Tracker API base URL.
    pub fn with_tracker_api_url(mut self, tracker_api_url: Url) -> Self {
        self.tracker_api_url = tracker_api_url;
        self
    }

    /// Returns the migration plan.
    pub fn plan(&self) -> &MigrationPlan {
        &self.plan
    }

    /// Returns the configured GitHub token.
    pub fn github_token(&self) -> &str {
        &self.github_token
    }

    /// Returns the configured Tracker token.
    pub fn tracker_token(&self) -> &str {
        &self.tracker_token
    }

    /// Returns the Tracker API base URL.
    pub fn tracker_api_url(&self) -> &Url {
        &self.tracker_api_url
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Checks the configuration before any client is built.
    ///
    /// Live runs also need a Tracker token and a project id.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.plan.validate()?;

        if self.dry_run {
            return Ok(());
        }

        if self.tracker_token.trim().is_empty() {
            return Err(ConfigError::MissingCredential { name: "pt-token" });
        }

        if self.plan.project_id == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pt-proj-id",
                message: "a destination project is required when dry run is disabled"
                    .to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> MigrationPlan {
        MigrationPlan::new("acme", vec!["widgets".to_string()], 99)
    }

    #[test]
    fn dry_run_needs_no_tracker_credentials() {
        let mut plan = plan();
        plan.project_id = 0;
        let config = RunnerConfig::new(plan, String::new(), String::new(), true).unwrap();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn live_run_needs_tracker_token() {
        let config = RunnerConfig::new(plan(), String::new(), String::new(), false).unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingCredential { name: "pt-token" })
        ));
    }

    #[test]
    fn live_run_needs_project_id() {
        let mut plan = plan();
        plan.project_id = 0;
        let config = RunnerConfig::new(plan, String::new(), "tok".to_string(), false).unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "pt-proj-id",
                ..
            })
        ));
    }

    #[test]
    fn plan_errors_come_first() {
        let config = RunnerConfig::new(
            MigrationPlan::default(),
            String::new(),
            String::new(),
            false,
        )
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyRepositories)
        ));
    }

    #[test]
    fn defaults_to_public_tracker_api() {
        let config = RunnerConfig::new(plan(), String::new(), String::new(), true).unwrap();
        assert_eq!(
            config.tracker_api_url().as_str(),
            "https://www.pivotaltracker.com/services/v5"
        );
    }
}
