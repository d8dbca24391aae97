//! Validation orchestrator for govcheck.
//!
//! A run is strictly sequential:
//!
//! 1. Load the agent registry (fatal on failure)
//! 2. Check the routing config (fatal on failure)
//! 3. Scan feature directories; for each checked one, record missing required
//!    files and then check its tasks document
//!
//! Precondition failures abort before any feature directory is read. Every
//! other problem becomes a [`Violation`], and all of them are collected into
//! one [`ValidationReport`].

mod report;
mod types;

#[cfg(test)]
mod tests;

pub use report::{ReportFormat, render_report};
pub use types::{Location, ValidationReport, Violation, ViolationKind};

use crate::config::{Config, TaskConvention};
use crate::context::RepoContext;
use crate::error::{GovError, Result};
use crate::features::{FeatureScanner, FeatureStatus};
use crate::registry::AgentRegistry;
use crate::routing::check_routing;
use crate::tasks::{check_document, parser_for};
use std::path::Path;

/// Runs governance checks against one repository.
#[derive(Debug)]
pub struct Validator<'a> {
    ctx: &'a RepoContext,
    config: &'a Config,
    convention: TaskConvention,
}

impl<'a> Validator<'a> {
    /// Create a validator using the configured task convention.
    pub fn new(ctx: &'a RepoContext, config: &'a Config) -> Self {
        Self {
            ctx,
            config,
            convention: config.task_convention,
        }
    }

    /// Override the task convention (e.g. from the command line).
    pub fn with_convention(mut self, convention: TaskConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Run every check and collect all violations.
    pub fn run(&self) -> Result<ValidationReport> {
        let registry = AgentRegistry::load(&self.ctx.registry_candidates)?;
        check_routing(&self.ctx.routing_path)?;

        let scanner = FeatureScanner::from_config(self.config)?;
        let features = scanner.scan(&self.ctx.specs_dir)?;

        let mut violations = Vec::new();
        let mut features_checked = 0;
        let mut features_skipped = 0;

        for feature in &features {
            let FeatureStatus::Checked { missing } = &feature.status else {
                features_skipped += 1;
                continue;
            };
            features_checked += 1;

            if !missing.is_empty() {
                violations.push(Violation::new(
                    self.ctx.display_path(&feature.path),
                    ViolationKind::MissingFeatureFiles {
                        missing: missing.clone(),
                    },
                ));
            }

            let tasks_path = feature.path.join(&self.config.tasks_file);
            if tasks_path.is_file() {
                violations.extend(self.check_tasks_file(&tasks_path, &registry)?);
            }
        }

        tracing::info!(
            checked = features_checked,
            skipped = features_skipped,
            violations = violations.len(),
            "governance checks finished"
        );

        Ok(self.report(&registry, features_checked, features_skipped, violations))
    }

    /// Check a single tasks document against the registry.
    ///
    /// Routing and feature structure are not checked.
    pub fn run_tasks_document(&self, path: &Path) -> Result<ValidationReport> {
        let registry = AgentRegistry::load(&self.ctx.registry_candidates)?;

        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.ctx.root.join(path)
        };
        if !path.is_file() {
            return Err(GovError::ConfigError(format!(
                "tasks document '{}' does not exist",
                path.display()
            )));
        }

        let violations = self.check_tasks_file(&path, &registry)?;
        Ok(self.report(&registry, 0, 0, violations))
    }

    fn check_tasks_file(&self, path: &Path, registry: &AgentRegistry) -> Result<Vec<Violation>> {
        let bytes = std::fs::read(path).map_err(|e| GovError::io(path, e))?;
        let text = String::from_utf8_lossy(&bytes);

        let parser = parser_for(self.convention, &text);
        Ok(check_document(
            parser.as_ref(),
            &self.ctx.display_path(path),
            &text,
            registry,
        ))
    }

    fn report(
        &self,
        registry: &AgentRegistry,
        features_checked: usize,
        features_skipped: usize,
        violations: Vec<Violation>,
    ) -> ValidationReport {
        ValidationReport {
            registry: self.ctx.display_path(registry.path()),
            agents: registry.len(),
            features_checked,
            features_skipped,
            violations,
        }
    }
}
