//! Similardiff: a line diff that hides changes explained by known substitutions.
//!
//! This is the main entry point for the `similardiff` CLI. It parses
//! arguments, sets up logging, runs the comparison pipeline, and maps errors
//! to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod diff;
pub mod diff_tool;
pub mod error;
pub mod exit_codes;
pub mod filter;
mod logging;
pub mod render;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
