//! Quizgen: template-driven generator for programming quiz questions.
//!
//! This is the main entry point for the `quizgen` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod assignment;
mod cli;
mod commands;
mod config;
mod error;
mod exit_codes;
mod extract;
mod fs;
mod generators;
mod logging;
mod naming;
mod question;
mod template;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
