//! Tests for the validation orchestrator and report rendering.

use super::*;
use crate::test_support::RepoFixture;

const GOOD_TASKS: &str = "## Login form\nowner: alice\nacceptance:\n  - renders\nvalidate:\n  - cargo test\n";

fn run(repo: &RepoFixture) -> Result<ValidationReport> {
    run_with(repo, Config::default())
}

fn run_with(repo: &RepoFixture, config: Config) -> Result<ValidationReport> {
    let ctx = RepoContext::from_root(repo.path(), &config)?;
    Validator::new(&ctx, &config).run()
}

// =========================================================================
// Preconditions
// =========================================================================

#[test]
fn test_missing_registry_aborts_before_scanning() {
    let repo = RepoFixture::new();
    repo.write("agents/routing.yml", "rules: []\n");
    repo.write("specs/003-login/spec.md", "");

    let err = run(&repo).unwrap_err();
    assert!(matches!(err, GovError::MissingRegistry { .. }));
    assert_eq!(err.exit_code(), crate::exit_codes::PRECONDITION_FAILURE);
}

#[test]
fn test_empty_registry_is_fatal() {
    let repo = RepoFixture::governed();
    repo.write("agents/registry.yml", "agents: []\n");

    let err = run(&repo).unwrap_err();
    assert!(matches!(err, GovError::EmptyRegistry { .. }));
}

#[test]
fn test_missing_routing_is_fatal() {
    let repo = RepoFixture::governed();
    repo.remove("agents/routing.yml");

    let err = run(&repo).unwrap_err();
    assert!(matches!(err, GovError::MissingRoutingConfig { .. }));
}

#[test]
fn test_malformed_routing_is_fatal() {
    let repo = RepoFixture::governed();
    repo.write("agents/routing.yml", "rules: [unclosed\n");

    let err = run(&repo).unwrap_err();
    assert!(matches!(err, GovError::MalformedRoutingConfig { .. }));
}

// =========================================================================
// Full runs
// =========================================================================

#[test]
fn test_clean_repository_passes() {
    let repo = RepoFixture::governed();
    repo.feature("003-login", GOOD_TASKS);

    let report = run(&repo).unwrap();

    assert!(report.passed());
    assert_eq!(report.registry, "agents/registry.yml");
    assert_eq!(report.agents, 2);
    assert_eq!(report.features_checked, 1);
    assert_eq!(report.features_skipped, 0);
}

#[test]
fn test_no_specs_root_passes() {
    let repo = RepoFixture::governed();
    let report = run(&repo).unwrap();

    assert!(report.passed());
    assert_eq!(report.features_checked, 0);
}

#[test]
fn test_only_spec_md_reports_one_aggregated_error() {
    let repo = RepoFixture::governed();
    repo.write("specs/003-login/spec.md", "# Login\n");

    let report = run(&repo).unwrap();

    assert_eq!(report.violations.len(), 1);
    assert_eq!(
        report.violations[0].kind,
        ViolationKind::MissingFeatureFiles {
            missing: vec!["plan.md".to_string(), "tasks.md".to_string()]
        }
    );
    assert_eq!(
        report.violations[0].to_string(),
        "[feature-structure] specs/003-login missing: plan.md, tasks.md"
    );
}

#[test]
fn test_placeholders_and_unpopulated_dirs_never_report() {
    let repo = RepoFixture::governed();
    repo.write("specs/000-x/notes.md", "");
    repo.write("specs/001-x/tasks.md", "garbage\n");
    repo.write("specs/NNN-name-here/spec.md", "");
    repo.mkdir("specs/009-later");

    let report = run(&repo).unwrap();

    assert!(report.passed());
    assert_eq!(report.features_checked, 0);
    assert_eq!(report.features_skipped, 4);
}

#[test]
fn test_structure_and_task_violations_collected_across_dirs() {
    let repo = RepoFixture::governed();
    repo.write("specs/010-a/spec.md", "");
    repo.write("specs/010-a/tasks.md", "## Task\nowner: charlie\nacceptance:\nvalidate:\n");
    repo.feature("020-b", "# nothing here\n");

    let report = run(&repo).unwrap();
    let lines: Vec<String> = report.violations.iter().map(|v| v.to_string()).collect();

    assert_eq!(
        lines,
        vec![
            "[feature-structure] specs/010-a missing: plan.md".to_string(),
            "[tasks] specs/010-a/tasks.md task-block 1 owner 'charlie' not found in agent registry"
                .to_string(),
            "[tasks] specs/020-b/tasks.md contains no task blocks".to_string(),
        ]
    );
}

#[test]
fn test_header_convention_from_config() {
    let repo = RepoFixture::governed();
    repo.feature(
        "003-login",
        "### T-100: Fix thing\nowner: alice\n\n### T-101: Other\n\n### T-102: Third\nowner: charlie\n",
    );
    let config = Config::from_yaml("task_convention: header\n").unwrap();

    let report = run_with(&repo, config).unwrap();
    let lines: Vec<String> = report.violations.iter().map(|v| v.to_string()).collect();

    assert_eq!(
        lines,
        vec![
            "[tasks] specs/003-login/tasks.md T-101 missing 'owner:'".to_string(),
            "[tasks] specs/003-login/tasks.md T-102 owner 'charlie' not found in agent registry"
                .to_string(),
        ]
    );
}

#[test]
fn test_convention_override_beats_config() {
    let repo = RepoFixture::governed();
    repo.feature("003-login", "### T-100: Fix thing\nowner: alice\n");

    let config = Config::default();
    let ctx = RepoContext::from_root(repo.path(), &config).unwrap();

    let delimited = Validator::new(&ctx, &config).run().unwrap();
    assert!(!delimited.passed());

    let header = Validator::new(&ctx, &config)
        .with_convention(TaskConvention::Header)
        .run()
        .unwrap();
    assert!(header.passed());

    let auto = Validator::new(&ctx, &config)
        .with_convention(TaskConvention::Auto)
        .run()
        .unwrap();
    assert!(auto.passed());
}

#[test]
fn test_custom_layout_from_config() {
    let repo = RepoFixture::new();
    repo.write("team/agents.yml", "- id: alice\n");
    repo.write("team/routing.yml", "{}\n");
    repo.write("docs/specs/100-a/spec.md", "");
    repo.write("docs/specs/100-a/todo.md", GOOD_TASKS);

    let config = Config::from_yaml(
        "registry_paths: [team/agents.yml]\nrouting_path: team/routing.yml\nspecs_dir: docs/specs\nrequired_files: [spec.md, todo.md]\ntasks_file: todo.md\n",
    )
    .unwrap();

    let report = run_with(&repo, config).unwrap();
    assert!(report.passed());
    assert_eq!(report.registry, "team/agents.yml");
    assert_eq!(report.features_checked, 1);
}

#[test]
fn test_repeated_runs_are_identical() {
    let repo = RepoFixture::governed();
    repo.write("specs/003-login/spec.md", "");
    repo.feature("004-search", "## A\nowner: zed\n---\n## B\n");

    let first = run(&repo).unwrap();
    let second = run(&repo).unwrap();

    assert_eq!(first.violations, second.violations);
    assert_eq!(
        render_report(&first, ReportFormat::Text).unwrap(),
        render_report(&second, ReportFormat::Text).unwrap()
    );
}

#[test]
fn test_tasks_document_mode_skips_routing_and_structure() {
    let repo = RepoFixture::new();
    repo.write("agents/registry.yml", "- id: alice\n");
    repo.write("drafts/tasks.md", "## A\nowner: bob\nacceptance:\nvalidate:\n");

    let config = Config::default();
    let ctx = RepoContext::from_root(repo.path(), &config).unwrap();
    let report = Validator::new(&ctx, &config)
        .run_tasks_document(std::path::Path::new("drafts/tasks.md"))
        .unwrap();

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].path, "drafts/tasks.md");
}

#[test]
fn test_tasks_document_mode_missing_file() {
    let repo = RepoFixture::governed();
    let config = Config::default();
    let ctx = RepoContext::from_root(repo.path(), &config).unwrap();

    let err = Validator::new(&ctx, &config)
        .run_tasks_document(std::path::Path::new("nope.md"))
        .unwrap_err();
    assert!(matches!(err, GovError::ConfigError(_)));
}

// =========================================================================
// Rendering
// =========================================================================

fn failing_report() -> ValidationReport {
    ValidationReport {
        registry: "agents/registry.yml".to_string(),
        agents: 2,
        features_checked: 1,
        features_skipped: 0,
        violations: vec![
            Violation::new(
                "specs/003-login",
                ViolationKind::MissingFeatureFiles {
                    missing: vec!["plan.md".to_string()],
                },
            ),
            Violation::at(
                "specs/003-login/tasks.md",
                Location::Task("T-101".to_string()),
                3,
                ViolationKind::MissingOwner,
            ),
        ],
    }
}

#[test]
fn test_render_text_success() {
    let report = ValidationReport {
        violations: vec![],
        ..failing_report()
    };
    assert_eq!(
        render_report(&report, ReportFormat::Text).unwrap(),
        "Governance checks passed.\n"
    );
}

#[test]
fn test_render_text_failure() {
    let text = render_report(&failing_report(), ReportFormat::Text).unwrap();
    assert_eq!(
        text,
        "Governance checks failed (2 violations):\n \
         - [feature-structure] specs/003-login missing: plan.md\n \
         - [tasks] specs/003-login/tasks.md T-101 missing 'owner:'\n"
    );
}

#[test]
fn test_render_json() {
    let json = render_report(&failing_report(), ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["passed"], false);
    assert_eq!(value["agents"], 2);
    assert_eq!(value["violations"][0]["rule"], "missing_feature_files");
    assert_eq!(value["violations"][0]["missing"][0], "plan.md");
    assert_eq!(value["violations"][1]["rule"], "missing_owner");
    assert_eq!(value["violations"][1]["task"], "T-101");
    assert!(value["violations"][1].get("location").is_none());
    assert!(value["violations"][0].get("task").is_none());
    assert!(value["violations"][0].get("block").is_none());
    assert_eq!(value["violations"][1]["line"], 3);
    assert_eq!(value["violations"][1]["message"], "missing 'owner:'");
}
