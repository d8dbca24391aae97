//! Rendering of validation reports.

use super::types::{ValidationReport, Violation};
use crate::error::Result;
use serde::Serialize;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// One line per violation.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    #[serde(flatten)]
    violation: &'a Violation,
    message: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    registry: &'a str,
    agents: usize,
    features_checked: usize,
    features_skipped: usize,
    violations: Vec<JsonViolation<'a>>,
}

/// Render a report in the requested format.
///
/// Output is a pure function of the report, so unchanged inputs render
/// byte-identically.
///
/// ```text
/// Governance checks failed (2 violations):
///  - [feature-structure] specs/003-login missing: plan.md, tasks.md
///  - [tasks] specs/004-search/tasks.md T-101 missing 'owner:'
/// ```
pub fn render_report(report: &ValidationReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => render_json(report),
    }
}

fn render_text(report: &ValidationReport) -> String {
    if report.passed() {
        return "Governance checks passed.\n".to_string();
    }

    let count = report.violations.len();
    let mut out = format!(
        "Governance checks failed ({} violation{}):\n",
        count,
        if count == 1 { "" } else { "s" }
    );
    for violation in &report.violations {
        out.push_str(&format!(" - {}\n", violation));
    }
    out
}

fn render_json(report: &ValidationReport) -> Result<String> {
    let json = JsonReport {
        passed: report.passed(),
        registry: &report.registry,
        agents: report.agents,
        features_checked: report.features_checked,
        features_skipped: report.features_skipped,
        violations: report
            .violations
            .iter()
            .map(|violation| JsonViolation {
                violation,
                message: violation.message(),
            })
            .collect(),
    };

    let mut out = serde_json::to_string_pretty(&json)?;
    out.push('\n');
    Ok(out)
}
