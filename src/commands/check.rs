//! Implementation of the `govcheck check` and `govcheck tasks` commands.

use super::{Outcome, Session};
use crate::cli::{CheckArgs, TasksArgs};
use crate::error::Result;
use crate::validate::{ValidationReport, Validator, render_report};

/// Execute `govcheck check`: every check over the whole repository.
pub fn cmd_check(session: &Session, args: CheckArgs) -> Result<Outcome> {
    let mut validator = Validator::new(&session.ctx, &session.config);
    if let Some(convention) = args.convention {
        validator = validator.with_convention(convention);
    }

    let report = validator.run()?;
    print!("{}", render_report(&report, args.format)?);
    Ok(outcome(&report))
}

/// Execute `govcheck tasks <file>`: one tasks document against the registry.
pub fn cmd_tasks(session: &Session, args: TasksArgs) -> Result<Outcome> {
    let mut validator = Validator::new(&session.ctx, &session.config);
    if let Some(convention) = args.convention {
        validator = validator.with_convention(convention);
    }

    let report = validator.run_tasks_document(&args.file)?;
    print!("{}", render_report(&report, args.format)?);
    Ok(outcome(&report))
}

fn outcome(report: &ValidationReport) -> Outcome {
    if report.passed() {
        Outcome::Passed
    } else {
        Outcome::Violations
    }
}
