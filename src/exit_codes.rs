//! Exit code constants for the govcheck CLI.
//!
//! - 0: All checks passed
//! - 1: Checks ran to completion and found violations
//! - 2: A precondition failed before checks could run (registry, routing, config)

/// All checks passed.
pub const SUCCESS: i32 = 0;

/// Checks ran to completion but found one or more violations.
pub const VIOLATIONS: i32 = 1;

/// Precondition failure: missing or unparsable registry, routing config, or tool config.
pub const PRECONDITION_FAILURE: i32 = 2;
