//! CLI argument parsing for quizgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::generators::QuestionKind;
use crate::question::BloomLevel;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Quizgen: template-driven generator for programming quiz questions.
///
/// Questions are markdown files with a YAML header:
/// - `generate` fills templates with randomized parameters
/// - `extract` turns textbook definitions into recall questions
/// - `assignment` samples questions into one combined document
#[derive(Parser, Debug)]
#[command(name = "quizgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./quizgen.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for quizgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate randomized questions.
    ///
    /// With no kinds, generates one question of every kind.
    /// `--count` repeats the batch.
    Generate(GenerateArgs),

    /// Extract definitions from textbook markdown into questions.
    ///
    /// Scans every `.md` file in the textbook directory for
    /// `>[!abstract]` callouts holding a `>>[!definition]`.
    Extract(ExtractArgs),

    /// Assemble an assignment document.
    ///
    /// Samples knowledge and conceptual questions from the questions
    /// directory and adds freshly generated programmatic questions.
    Assignment(AssignmentArgs),

    /// List generator kinds with their topic and template.
    Kinds,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Kinds to generate (default: all).
    #[arg(value_enum)]
    pub kinds: Vec<QuestionKind>,

    /// Number of times to generate the batch.
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Directory to write questions to (overrides config).
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Templates directory (overrides config).
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `extract` command.
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Directory of markdown sources (overrides config).
    #[arg(long)]
    pub textbook_dir: Option<PathBuf>,

    /// Directory to write questions to (overrides config).
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Templates directory (overrides config).
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,
}

/// Arguments for the `assignment` command.
#[derive(Parser, Debug)]
pub struct AssignmentArgs {
    /// Number of knowledge questions (overrides config).
    #[arg(long)]
    pub knowledge: Option<usize>,

    /// Number of freshly generated programmatic questions (overrides config).
    #[arg(long)]
    pub programmatic: Option<usize>,

    /// Number of conceptual questions (overrides config).
    #[arg(long)]
    pub conceptual: Option<usize>,

    /// Only sample questions with this topic (repeatable; replaces config topics).
    #[arg(long = "topic")]
    pub topics: Vec<String>,

    /// Only sample questions at this bloom level (repeatable; replaces config levels).
    #[arg(long = "bloom-level", value_parser = parse_bloom_level)]
    pub bloom_levels: Vec<BloomLevel>,

    /// Directory of generated questions (overrides config output_dir).
    #[arg(long)]
    pub questions_dir: Option<PathBuf>,

    /// Path of the assignment document (overrides config).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Templates directory (overrides config).
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_bloom_level(s: &str) -> Result<BloomLevel, String> {
    BloomLevel::parse(s).ok_or_else(|| {
        format!(
            "unknown bloom level '{}' (expected knowledge, apply, or analyze)",
            s
        )
    })
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
