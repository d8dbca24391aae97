//! Error types for the govcheck CLI.
//!
//! Every variant here is a precondition failure: the run could not check
//! anything meaningful. Problems found *during* checking are reported as
//! [`Violation`](crate::validate::Violation)s instead and never surface as errors.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for govcheck operations.
#[derive(Error, Debug)]
pub enum GovError {
    /// None of the registry candidate paths exist.
    #[error(
        "could not find agent registry file. Expected one of: {}",
        join_paths(.candidates)
    )]
    MissingRegistry { candidates: Vec<PathBuf> },

    /// The registry parsed but yielded no agent identifiers.
    #[error(
        "no agent IDs found in {}\n\nFix: add entries like '- id: <agent-id>' to the registry.",
        .path.display()
    )]
    EmptyRegistry { path: PathBuf },

    /// The registry is not valid YAML.
    #[error("failed to parse agent registry '{}': {}", .path.display(), .message)]
    MalformedRegistry { path: PathBuf, message: String },

    /// The routing configuration file does not exist.
    #[error("missing routing rules file: {}", .path.display())]
    MissingRoutingConfig { path: PathBuf },

    /// The routing configuration file is not valid YAML.
    #[error("failed to parse routing config '{}': {}", .path.display(), .message)]
    MalformedRoutingConfig { path: PathBuf, message: String },

    /// The tool configuration is missing, unparsable, or invalid.
    #[error("{0}")]
    ConfigError(String),

    /// An input file or directory could not be read.
    #[error("failed to read '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be serialized.
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

impl GovError {
    /// Returns the exit code for this error.
    ///
    /// All errors are precondition failures, distinct from "ran and found violations".
    pub fn exit_code(&self) -> i32 {
        match self {
            GovError::MissingRegistry { .. }
            | GovError::EmptyRegistry { .. }
            | GovError::MalformedRegistry { .. }
            | GovError::MissingRoutingConfig { .. }
            | GovError::MalformedRoutingConfig { .. }
            | GovError::ConfigError(_)
            | GovError::Io { .. }
            | GovError::Render(_) => exit_codes::PRECONDITION_FAILURE,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GovError::Io {
            path: path.into(),
            source,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for govcheck operations.
pub type Result<T> = std::result::Result<T, GovError>;
