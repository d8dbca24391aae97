//! Configuration model for govcheck.
//!
//! This module defines the Config struct that represents the optional
//! `.govcheck.yml` at the repository root. It supports forward-compatible YAML
//! parsing (unknown fields are ignored), defaults that match the conventional
//! repository layout, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{DEFAULT_CONFIG_FILE, TaskConvention};
