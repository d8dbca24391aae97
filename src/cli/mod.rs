//! CLI argument parsing for govcheck.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::TaskConvention;
use crate::validate::ReportFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Govcheck: governance checks for spec-driven, multi-agent task repositories.
///
/// Verifies that:
/// - the agent registry exists and lists at least one agent
/// - the routing rules file exists and is valid YAML
/// - every populated feature directory under specs/ has spec.md, plan.md and tasks.md
/// - every task declares an owner that exists in the registry
///
/// Exit codes: 0 passed, 1 violations found, 2 precondition failed.
#[derive(Parser, Debug)]
#[command(name = "govcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Repository root (defaults to the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file (defaults to .govcheck.yml at the root, if present).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors on stderr.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Command to run (defaults to `check`).
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for govcheck.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run all governance checks.
    ///
    /// Loads the registry, checks the routing config, then validates every
    /// feature directory and tasks document, reporting all violations at once.
    Check(CheckArgs),

    /// List agent identifiers from the registry.
    Agents,

    /// Check a single tasks document against the registry.
    ///
    /// Skips the routing and feature structure checks.
    Tasks(TasksArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug, Default)]
pub struct CheckArgs {
    /// Task convention (overrides the config file).
    #[arg(long, value_enum)]
    pub convention: Option<TaskConvention>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `tasks` command.
#[derive(Parser, Debug)]
pub struct TasksArgs {
    /// Tasks document to check (relative to the root).
    pub file: PathBuf,

    /// Task convention (overrides the config file).
    #[arg(long, value_enum)]
    pub convention: Option<TaskConvention>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
