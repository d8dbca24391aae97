//! Agent registry loading.
//!
//! The registry is a YAML document listing the agents allowed to own tasks.
//! Two shapes are accepted:
//!
//! ```text
//! agents:
//!   - id: alice
//!     role: reviewer
//!   - id: bot-7
//! ```
//!
//! or the same list at the top level. Every entry with a non-empty string `id`
//! contributes that identifier; other fields are ignored and entries without a
//! usable `id` are skipped.


use crate::error::{GovError, Result};
use serde_yaml::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// The set of agent identifiers known for one run.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    path: PathBuf,
    ids: BTreeSet<String>,
}

impl AgentRegistry {
    /// Locate and load the registry from the first existing candidate.
    ///
    /// # Errors
    ///
    /// * `MissingRegistry` - no candidate exists
    /// * `MalformedRegistry` - the document is not valid YAML
    /// * `EmptyRegistry` - the document yields zero identifiers
    pub fn load(candidates: &[PathBuf]) -> Result<Self> {
        let path = Self::locate(candidates)?;
        let bytes = std::fs::read(&path).map_err(|e| GovError::io(&path, e))?;
        let text = String::from_utf8_lossy(&bytes);

        let registry = Self::from_yaml(&path, &text)?;
        tracing::info!(
            path = %path.display(),
            agents = registry.len(),
            "loaded agent registry"
        );
        Ok(registry)
    }

    /// Return the first candidate path that exists.
    pub fn locate(candidates: &[PathBuf]) -> Result<PathBuf> {
        for candidate in candidates {
            if candidate.is_file() {
                return Ok(candidate.clone());
            }
            tracing::debug!(path = %candidate.display(), "registry candidate not found");
        }

        Err(GovError::MissingRegistry {
            candidates: candidates.to_vec(),
        })
    }

    /// Parse registry YAML that was read from `path`.
    pub fn from_yaml(path: &Path, text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(GovError::EmptyRegistry {
                path: path.to_path_buf(),
            });
        }

        let document: Value =
            serde_yaml::from_str(text).map_err(|e| GovError::MalformedRegistry {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let ids: BTreeSet<String> = entries(&document)
            .iter()
            .filter_map(|entry| entry.get("id").and_then(Value::as_str))
            .filter(|id| !id.trim().is_empty())
            .map(str::to_string)
            .collect();

        if ids.is_empty() {
            return Err(GovError::EmptyRegistry {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            ids,
        })
    }

    /// Path the registry was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `id` names a registered agent.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Entry list of a registry document: `agents:` under a mapping, or a top-level list.
fn entries(document: &Value) -> &[Value] {
    match document {
        Value::Sequence(list) => list.as_slice(),
        Value::Mapping(_) => document
            .get("agents")
            .and_then(Value::as_sequence)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}
