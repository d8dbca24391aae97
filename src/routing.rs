//! Routing configuration check.
//!
//! Only structure is checked: the routing rules file must exist and parse as
//! YAML. Its rules are not interpreted.

use crate::error::{GovError, Result};
use std::path::{Path, PathBuf};

/// Verify the routing rules file exists and is syntactically valid YAML.
///
/// # Errors
///
/// * `MissingRoutingConfig` - the file does not exist
/// * `MalformedRoutingConfig` - the file is not valid YAML
pub fn check_routing(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(GovError::MissingRoutingConfig {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| GovError::io(path, e))?;
    let text = String::from_utf8_lossy(&bytes);

    // An empty document is valid YAML (null).
    if !text.trim().is_empty() {
        serde_yaml::from_str::<serde_yaml::Value>(&text).map_err(|e| {
            GovError::MalformedRoutingConfig {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
    }

    tracing::info!(path = %path.display(), "routing config parsed");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_missing_routing_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("agents/routing.yml");

        let err = check_routing(&path).unwrap_err();
        assert!(matches!(err, GovError::MissingRoutingConfig { .. }));
    }

    #[test]
    fn valid_yaml_passes_without_schema_checks() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("routing.yml");
        std::fs::write(
            &path,
            "rules:\n  - match: docs/**\n    agent: alice\nanything: [1, 2, 3]\n",
        )
        .unwrap();

        assert_eq!(check_routing(&path).unwrap(), path);
    }

    #[test]
    fn empty_file_is_structurally_valid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("routing.yml");
        std::fs::write(&path, "").unwrap();

        assert!(check_routing(&path).is_ok());
    }

    #[test]
    fn invalid_yaml_is_malformed_with_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("routing.yml");
        std::fs::write(&path, "rules: [unclosed\n").unwrap();

        match check_routing(&path).unwrap_err() {
            GovError::MalformedRoutingConfig { path: p, message } => {
                assert_eq!(p, path);
                assert!(!message.is_empty());
            }
            other => panic!("expected MalformedRoutingConfig, got {other:?}"),
        }
    }

    #[test]
    fn directory_is_missing_routing_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("routing.yml");
        std::fs::create_dir(&path).unwrap();

        let err = check_routing(&path).unwrap_err();
        assert!(matches!(err, GovError::MissingRoutingConfig { .. }));
    }
}
