//! Feature directory scanning.
//!
//! Feature directories are the direct children of the specs root. Each is
//! classified before any check runs:
//!
//! - **placeholder**: template directories (name contains a marker such as
//!   `name-here`, or starts with a reserved prefix such as `000-`) are exempt
//! - **not populated**: directories without any document are skipped
//! - **checked**: every required file must exist
//!
//! Directories are returned sorted by name so reports are stable across
//! platforms.


use crate::config::Config;
use crate::error::{GovError, Result};
use globset::GlobSet;
use std::fs;
use std::path::{Path, PathBuf};

/// How a feature directory is treated by the checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureStatus {
    /// Template directory; exempt from every check.
    Placeholder,
    /// Contains no documents yet; skipped.
    NotPopulated,
    /// Checked; lists required files that are absent (in required order).
    Checked { missing: Vec<String> },
}

/// One scanned feature directory.
#[derive(Debug, Clone)]
pub struct FeatureDir {
    /// Directory name.
    pub name: String,
    /// Absolute directory path.
    pub path: PathBuf,
    /// Classification and structural result.
    pub status: FeatureStatus,
}

impl FeatureDir {
    /// Whether the directory takes part in checks.
    pub fn is_checked(&self) -> bool {
        matches!(self.status, FeatureStatus::Checked { .. })
    }
}

/// Placeholder and applicability rules, compiled once per run.
#[derive(Debug)]
pub struct FeatureScanner {
    markers: Vec<String>,
    prefixes: Vec<String>,
    required_files: Vec<String>,
    document_globs: GlobSet,
}

impl FeatureScanner {
    /// Build a scanner from config.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            markers: config.normalized_placeholder_markers(),
            prefixes: config.normalized_placeholder_prefixes(),
            required_files: config.required_files.clone(),
            document_globs: config.document_glob_set()?,
        })
    }

    /// Whether a directory name marks a template directory (case-insensitive).
    pub fn is_placeholder(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.markers.iter().any(|m| lowered.contains(m.as_str()))
            || self.prefixes.iter().any(|p| lowered.starts_with(p.as_str()))
    }

    /// Scan the direct subdirectories of `specs_dir`.
    ///
    /// A missing specs root yields no directories.
    pub fn scan(&self, specs_dir: &Path) -> Result<Vec<FeatureDir>> {
        if !specs_dir.is_dir() {
            tracing::debug!(path = %specs_dir.display(), "specs root not found, nothing to scan");
            return Ok(Vec::new());
        }

        let mut dirs = Vec::new();
        for entry in fs::read_dir(specs_dir).map_err(|e| GovError::io(specs_dir, e))? {
            let entry = entry.map_err(|e| GovError::io(specs_dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        dirs.sort();

        dirs.into_iter().map(|path| self.classify(path)).collect()
    }

    /// Classify one feature directory and check its required files.
    pub fn classify(&self, path: PathBuf) -> Result<FeatureDir> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let status = if self.is_placeholder(&name) {
            tracing::debug!(feature = %name, "skipping placeholder feature directory");
            FeatureStatus::Placeholder
        } else if !self.has_documents(&path)? {
            tracing::debug!(feature = %name, "skipping feature directory without documents");
            FeatureStatus::NotPopulated
        } else {
            let missing = self
                .required_files
                .iter()
                .filter(|file| !path.join(file).is_file())
                .cloned()
                .collect();
            FeatureStatus::Checked { missing }
        };

        Ok(FeatureDir { name, path, status })
    }

    /// Whether the directory directly holds a document or a required file.
    fn has_documents(&self, dir: &Path) -> Result<bool> {
        for entry in fs::read_dir(dir).map_err(|e| GovError::io(dir, e))? {
            let entry = entry.map_err(|e| GovError::io(dir, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let name: &str = &file_name.to_string_lossy();
            if self.document_globs.is_match(name)
                || self.required_files.iter().any(|r| r.as_str() == name)
            {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
