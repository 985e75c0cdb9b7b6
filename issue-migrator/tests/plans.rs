use std::path::PathBuf;

use issue_migrator::{convert_issue, ConfigError, MigrationPlan};

mod common;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/plans")
}

#[test]
fn load_full_plan_from_fixture() {
    let plan = MigrationPlan::load(&fixtures_root().join("acme.toml")).unwrap();

    assert_eq!(plan.owner, "acme");
    assert_eq!(plan.repos, vec!["widgets".to_string(), "gadgets".to_string()]);
    assert_eq!(plan.project_id, 99);
    assert_eq!(plan.limit, 250);
    assert!(plan.validate().is_ok());
}

#[test]
fn custom_labels_reach_converted_stories() {
    let plan = MigrationPlan::load(&fixtures_root().join("acme.toml")).unwrap();
    let issue = common::issue(42, "Bug: crash on load", "steps...", &["bug"]);

    let request = convert_issue("widgets", &issue, &plan.label_scheme());

    assert_eq!(
        request.label_names(),
        vec!["from-github", "github-repo/widgets"]
    );
}

#[test]
fn minimal_plan_uses_defaults() {
    let plan = MigrationPlan::load(&fixtures_root().join("minimal.toml")).unwrap();

    assert_eq!(plan.limit, 1000);
    assert_eq!(plan.marker_label, "github-migrated");
    assert_eq!(plan.repo_label_prefix, "repo/");
    assert_eq!(plan.project_id, 0);
}

#[test]
fn plan_without_repos_loads_but_fails_validation() {
    let plan = MigrationPlan::load(&fixtures_root().join("no-repos.toml")).unwrap();

    assert!(plan.repos.is_empty());
    assert!(matches!(
        plan.validate(),
        Err(ConfigError::EmptyRepositories)
    ));
}
