//! Command implementations for govcheck.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command resolves the same [`Session`] first: the
//! config and the repository paths derived from it.

mod agents;
mod check;

use crate::cli::{CheckArgs, Cli, Command};
use crate::config::Config;
use crate::context::RepoContext;
use crate::error::Result;
use crate::exit_codes;

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every check passed.
    Passed,
    /// Checks ran and found violations.
    Violations,
}

impl Outcome {
    /// Returns the exit code for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Passed => exit_codes::SUCCESS,
            Outcome::Violations => exit_codes::VIOLATIONS,
        }
    }
}

/// Config and resolved paths shared by every command.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub ctx: RepoContext,
}

impl Session {
    /// Resolve config and context from the global CLI options.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let root = RepoContext::root_or_cwd(cli.root.as_deref())?;
        let config = Config::resolve(&root, cli.config.as_deref())?;
        let ctx = RepoContext::from_root(&root, &config)?;
        Ok(Self { config, ctx })
    }
}

/// Dispatch a command to its implementation.
///
/// Running without a command is the same as `check` with default arguments.
pub fn dispatch(cli: Cli) -> Result<Outcome> {
    let session = Session::resolve(&cli)?;

    match cli.command {
        None => check::cmd_check(&session, CheckArgs::default()),
        Some(Command::Check(args)) => check::cmd_check(&session, args),
        Some(Command::Agents) => agents::cmd_agents(&session),
        Some(Command::Tasks(args)) => check::cmd_tasks(&session, args),
    }
}
