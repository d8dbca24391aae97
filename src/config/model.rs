//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a govcheck run.
///
/// This struct represents the contents of `.govcheck.yml`. All paths are
/// relative to the repository root. Unknown fields in the YAML are ignored
/// for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Agent settings
    // =========================================================================
    /// Candidate registry paths, in lookup order.
    #[serde(default = "default_registry_paths")]
    pub registry_paths: Vec<String>,

    /// Routing rules file (must exist and parse as YAML).
    #[serde(default = "default_routing_path")]
    pub routing_path: String,

    // =========================================================================
    // Feature directory settings
    // =========================================================================
    /// Directory whose direct children are feature directories.
    #[serde(default = "default_specs_dir")]
    pub specs_dir: String,

    /// Files required in every populated feature directory.
    #[serde(default = "default_required_files")]
    pub required_files: Vec<String>,

    /// Tasks document name inside a feature directory.
    #[serde(default = "default_tasks_file")]
    pub tasks_file: String,

    /// Case-insensitive name fragments marking placeholder directories.
    #[serde(default = "default_placeholder_markers")]
    pub placeholder_markers: Vec<String>,

    /// Case-insensitive name prefixes marking placeholder directories.
    #[serde(default = "default_placeholder_prefixes")]
    pub placeholder_prefixes: Vec<String>,

    /// Globs (matched against file names) for documents that make a directory populated.
    #[serde(default = "default_document_globs")]
    pub document_globs: Vec<String>,

    // =========================================================================
    // Task settings
    // =========================================================================
    /// How tasks documents are split into task blocks.
    #[serde(default)]
    pub task_convention: TaskConvention,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_paths: default_registry_paths(),
            routing_path: default_routing_path(),
            specs_dir: default_specs_dir(),
            required_files: default_required_files(),
            tasks_file: default_tasks_file(),
            placeholder_markers: default_placeholder_markers(),
            placeholder_prefixes: default_placeholder_prefixes(),
            document_globs: default_document_globs(),
            task_convention: TaskConvention::default(),
        }
    }
}
