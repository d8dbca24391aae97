//! Govcheck: governance checks for spec-driven, multi-agent task repositories.
//!
//! A run loads the agent registry, checks the routing config, then walks every
//! feature directory under `specs/`, verifying its required files and that each
//! task in its `tasks.md` names an owner from the registry. Problems found while
//! checking are collected into a [`validate::ValidationReport`]; problems that
//! prevent checking at all are [`error::GovError`]s.
//!
//! ```no_run
//! use govcheck::config::Config;
//! use govcheck::context::RepoContext;
//! use govcheck::validate::Validator;
//!
//! let config = Config::resolve(std::path::Path::new("."), None)?;
//! let ctx = RepoContext::from_root(".", &config)?;
//! let report = Validator::new(&ctx, &config).run()?;
//! for violation in &report.violations {
//!     println!("{}", violation);
//! }
//! # Ok::<(), govcheck::error::GovError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod features;
pub mod logging;
pub mod registry;
pub mod routing;
pub mod tasks;
pub mod validate;

#[cfg(test)]
mod test_support;
