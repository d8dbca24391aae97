//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{GovError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(GovError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GovError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a repository root.
    ///
    /// An explicit path must exist. Without one, `.govcheck.yml` at the root is
    /// used when present and built-in defaults otherwise.
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path)
            };
            tracing::debug!(path = %path.display(), "loading explicit config");
            return Self::load(path);
        }

        let default_path: PathBuf = root.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            tracing::debug!(path = %default_path.display(), "loading config");
            Self::load(default_path)
        } else {
            tracing::debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                GovError::ConfigError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `registry_paths` and `required_files` must be non-empty
    /// - path-like entries must be non-empty and relative
    /// - `document_globs` must compile
    pub fn validate(&self) -> Result<()> {
        if self.registry_paths.is_empty() {
            return Err(GovError::ConfigError(
                "config validation failed: registry_paths must list at least one path"
                    .to_string(),
            ));
        }

        if self.required_files.is_empty() {
            return Err(GovError::ConfigError(
                "config validation failed: required_files must list at least one file".to_string(),
            ));
        }

        let paths = self
            .registry_paths
            .iter()
            .map(|p| ("registry_paths", p))
            .chain(std::iter::once(("routing_path", &self.routing_path)))
            .chain(std::iter::once(("specs_dir", &self.specs_dir)))
            .chain(std::iter::once(("tasks_file", &self.tasks_file)))
            .chain(self.required_files.iter().map(|p| ("required_files", p)));

        for (field, value) in paths {
            if value.trim().is_empty() {
                return Err(GovError::ConfigError(format!(
                    "config validation failed: {} entries must be non-empty",
                    field
                )));
            }
            if Path::new(value).is_absolute() {
                return Err(GovError::ConfigError(format!(
                    "config validation failed: {} must be relative to the repository root (found '{}')",
                    field, value
                )));
            }
        }

        for marker in self
            .placeholder_markers
            .iter()
            .chain(self.placeholder_prefixes.iter())
        {
            if marker.is_empty() {
                return Err(GovError::ConfigError(
                    "config validation failed: placeholder markers and prefixes must be non-empty"
                        .to_string(),
                ));
            }
        }

        self.document_glob_set()?;

        Ok(())
    }

    /// Compile `document_globs` into a matcher for file names.
    pub fn document_glob_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.document_globs {
            let glob = Glob::new(pattern).map_err(|e| {
                GovError::ConfigError(format!(
                    "invalid glob in document_globs: '{}' - {}\n\
                     Fix: edit the config and correct or remove this pattern.",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| {
            GovError::ConfigError(format!("failed to compile document_globs: {}", e))
        })
    }

    /// Placeholder markers normalized to lowercase.
    pub fn normalized_placeholder_markers(&self) -> Vec<String> {
        self.placeholder_markers
            .iter()
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Placeholder prefixes normalized to lowercase.
    pub fn normalized_placeholder_prefixes(&self) -> Vec<String> {
        self.placeholder_prefixes
            .iter()
            .map(|s| s.to_lowercase())
            .collect()
    }
}
