//! Configuration types and defaults for govcheck.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};

/// Config file looked up at the repository root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".govcheck.yml";

/// Convention used to split a tasks document into task blocks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskConvention {
    /// `### T-ID: Title` headers; first `owner:` line in each body wins.
    Header,
    /// Blocks separated by `---` lines; each needs `owner:`, `acceptance:` and `validate:`.
    #[default]
    Delimited,
    /// Use `header` when the document contains a task header, otherwise `delimited`.
    Auto,
}

impl std::fmt::Display for TaskConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskConvention::Header => write!(f, "header"),
            TaskConvention::Delimited => write!(f, "delimited"),
            TaskConvention::Auto => write!(f, "auto"),
        }
    }
}

/// Registry candidates, checked in order; the first that exists is used.
pub fn default_registry_paths() -> Vec<String> {
    vec![
        "agents/registry/registry.yml".to_string(),
        "agents/registry.yml".to_string(),
        "agents/registry/agents.yml".to_string(),
        "agents/registry/agents.v1.yml".to_string(),
    ]
}

/// Files every populated feature directory must contain.
pub fn default_required_files() -> Vec<String> {
    vec![
        "spec.md".to_string(),
        "plan.md".to_string(),
        "tasks.md".to_string(),
    ]
}

/// Name fragments that mark a template feature directory.
pub fn default_placeholder_markers() -> Vec<String> {
    vec!["name-here".to_string()]
}

/// Name prefixes reserved for template feature directories.
pub fn default_placeholder_prefixes() -> Vec<String> {
    vec!["000-".to_string(), "001-".to_string()]
}

/// Globs for files that make a feature directory count as populated.
pub fn default_document_globs() -> Vec<String> {
    vec!["*.md".to_string()]
}

// Default value functions for serde
pub(crate) fn default_routing_path() -> String {
    "agents/routing.yml".to_string()
}
pub(crate) fn default_specs_dir() -> String {
    "specs".to_string()
}
pub(crate) fn default_tasks_file() -> String {
    "tasks.md".to_string()
}
