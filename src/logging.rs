//! Diagnostic logging.
//!
//! Diagnostics go to stderr through `tracing`; reports are printed on stdout
//! and never pass through here. The level comes from `GOVCHECK_LOG` when set,
//! otherwise from the `-v`/`-q` flags.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive (e.g. `govcheck=debug`).
pub const LOG_ENV: &str = "GOVCHECK_LOG";

/// Map CLI verbosity to a default level.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("govcheck={}", level_for(verbose, quiet))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
