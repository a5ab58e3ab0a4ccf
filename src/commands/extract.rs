//! Implementation of the `quizgen extract` command.

use super::{print_paths, resolve_path};
use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::extract::process_textbook;
use crate::generators::Generator;
use crate::template::TemplateStore;
use std::path::PathBuf;
use tracing::info;

/// Execute the `quizgen extract` command.
///
/// Writes one definition question per extracted definition and prints
/// each written path.
pub fn cmd_extract(config: &Config, args: ExtractArgs) -> Result<Vec<PathBuf>> {
    let textbook_dir = resolve_path(args.textbook_dir, &config.textbook_dir);
    let templates = TemplateStore::new(resolve_path(args.templates_dir, &config.templates_dir));
    let generator = Generator::new(templates, resolve_path(args.output_dir, &config.output_dir));

    let written = process_textbook(&textbook_dir, &generator)?;

    info!(
        count = written.len(),
        textbook = %textbook_dir.display(),
        "generated definition questions"
    );
    print_paths(&written);
    Ok(written)
}
