//! Command implementations for quizgen.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the helpers they share for resolving paths and
//! seeding the random number generator.

mod assignment;
mod extract;
mod generate;
mod kinds;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{QuizError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::debug;

/// Dispatch a command to its implementation.
///
/// Commands that touch the filesystem first resolve the config: the
/// `--config` file, else `quizgen.yaml` in the working directory, else
/// defaults.
pub fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        command,
        ..
    } = cli;

    if let Command::Kinds = command {
        return kinds::cmd_kinds();
    }

    let cwd = std::env::current_dir().map_err(|e| {
        QuizError::IoError(format!("failed to determine working directory: {}", e))
    })?;
    let config = Config::discover(config_path.as_deref(), &cwd)?;

    match command {
        Command::Generate(args) => generate::cmd_generate(&config, args).map(|_| ()),
        Command::Extract(args) => extract::cmd_extract(&config, args).map(|_| ()),
        Command::Assignment(args) => assignment::cmd_assignment(&config, args).map(|_| ()),
        Command::Kinds => kinds::cmd_kinds(),
    }
}

/// A CLI flag if given, else the configured path.
fn resolve_path(flag: Option<PathBuf>, configured: &str) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(configured))
}

/// Seeded RNG for reproducible runs, OS-seeded otherwise.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "using seeded rng");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

/// Print written paths to stdout, one per line.
fn print_paths(paths: &[PathBuf]) {
    for path in paths {
        println!("{}", path.display());
    }
}

/// Templates directory shipped with the crate, for command tests.
#[cfg(test)]
fn shipped_templates_dir() -> PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}
