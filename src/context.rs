//! Repository context resolution for govcheck.
//!
//! The repository root is an explicit input (`--root`, or the current working
//! directory). This module turns that root plus the [`Config`] into the absolute
//! paths every check reads from, and renders paths back in root-relative form
//! for reports.

use crate::config::Config;
use crate::error::{GovError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths for one govcheck run.
///
/// All paths are absolute.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// Absolute path to the repository root.
    pub root: PathBuf,

    /// Registry candidates, in lookup order.
    pub registry_candidates: Vec<PathBuf>,

    /// Absolute path to the routing rules file.
    pub routing_path: PathBuf,

    /// Absolute path to the directory holding feature directories.
    pub specs_dir: PathBuf,
}

impl RepoContext {
    /// The root to use: the given one, or the current working directory.
    pub fn root_or_cwd(root: Option<&Path>) -> Result<PathBuf> {
        match root {
            Some(root) => Ok(root.to_path_buf()),
            None => env::current_dir().map_err(|e| {
                GovError::ConfigError(format!("failed to get current working directory: {}", e))
            }),
        }
    }

    /// Resolve the context from a specific root directory.
    pub fn from_root<P: AsRef<Path>>(root: P, config: &Config) -> Result<Self> {
        let root = root.as_ref();

        if !root.is_dir() {
            return Err(GovError::ConfigError(format!(
                "repository root '{}' is not a directory",
                root.display()
            )));
        }

        let root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            env::current_dir()
                .map_err(|e| GovError::io(root, e))?
                .join(root)
        };

        Ok(Self {
            registry_candidates: config
                .registry_paths
                .iter()
                .map(|p| root.join(p))
                .collect(),
            routing_path: root.join(&config.routing_path),
            specs_dir: root.join(&config.specs_dir),
            root,
        })
    }

    /// Render a path relative to the root with forward slashes.
    ///
    /// Paths outside the root are rendered as given.
    pub fn display_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
