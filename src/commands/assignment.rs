//! Implementation of the `quizgen assignment` command.

use super::{make_rng, resolve_path};
use crate::assignment::create_assignment;
use crate::cli::AssignmentArgs;
use crate::config::Config;
use crate::error::Result;
use crate::generators::Generator;
use crate::template::TemplateStore;
use std::path::PathBuf;

/// Execute the `quizgen assignment` command.
///
/// Counts and filters given on the command line replace the configured
/// ones; the written document path is printed.
pub fn cmd_assignment(config: &Config, args: AssignmentArgs) -> Result<PathBuf> {
    let mut settings = config.assignment.clone();
    if let Some(n) = args.knowledge {
        settings.num_knowledge_questions = n;
    }
    if let Some(n) = args.programmatic {
        settings.num_programmatic_questions = n;
    }
    if let Some(n) = args.conceptual {
        settings.num_conceptual_questions = n;
    }
    if !args.topics.is_empty() {
        settings.topics = args.topics;
    }
    if !args.bloom_levels.is_empty() {
        settings.bloom_levels = args.bloom_levels;
    }

    let templates = TemplateStore::new(resolve_path(args.templates_dir, &config.templates_dir));
    let generator = Generator::new(templates, resolve_path(args.questions_dir, &config.output_dir));
    let output = resolve_path(args.output, &config.assignment_path);
    let mut rng = make_rng(args.seed);

    let path = create_assignment(&settings, &generator, &output, &mut rng)?;
    println!("{}", path.display());
    Ok(path)
}
