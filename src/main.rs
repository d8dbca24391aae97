//! Entry point for the `govcheck` CLI. Parses arguments, dispatches to the
//! command handler, and maps the outcome to an exit code.

use govcheck::cli::Cli;
use govcheck::{commands, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.verbose, cli.quiet);

    match commands::dispatch(cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code() as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
