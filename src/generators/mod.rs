//! Question generators.
//!
//! Each generator is a pure function of an RNG that returns a
//! [`QuestionDraft`]: the frontmatter, the template to fill, and the
//! placeholder values. [`Generator`] turns a draft into a file on disk.

use crate::error::Result;
use crate::question::{BloomLevel, QuestionFile, QuestionFrontmatter};
use crate::template::{TemplateStore, vars};
use chrono::Utc;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod definition;
pub mod expressions;
pub mod loops;
pub mod truth_table;
pub mod variables;

#[cfg(test)]
mod tests;

/// A generated question that has not been rendered yet.
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    pub frontmatter: QuestionFrontmatter,
    /// Template file name inside the templates directory.
    pub template: &'static str,
    /// Placeholder values in the order they were produced.
    pub replacements: Vec<(&'static str, String)>,
}

#[cfg(test)]
impl QuestionDraft {
    /// Value supplied for a placeholder, if any.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.replacements
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Choose one item uniformly, taking ownership of it.
pub(crate) fn pick<T, R: Rng + ?Sized>(rng: &mut R, mut items: Vec<T>) -> T {
    let index = rng.random_range(0..items.len());
    items.swap_remove(index)
}

/// The randomized question generators.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Loop,
    OffByOne,
    BooleanExpression,
    NumericExpression,
    MixedExpression,
    TruthTable,
    VariableAssignment,
    VariableScope,
    VariableState,
}

impl QuestionKind {
    /// Every kind, in the order a default batch is generated.
    pub fn all() -> &'static [QuestionKind] {
        &[
            QuestionKind::Loop,
            QuestionKind::OffByOne,
            QuestionKind::BooleanExpression,
            QuestionKind::NumericExpression,
            QuestionKind::MixedExpression,
            QuestionKind::TruthTable,
            QuestionKind::VariableAssignment,
            QuestionKind::VariableScope,
            QuestionKind::VariableState,
        ]
    }

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            QuestionKind::Loop => "loop",
            QuestionKind::OffByOne => "off-by-one",
            QuestionKind::BooleanExpression => "boolean-expression",
            QuestionKind::NumericExpression => "numeric-expression",
            QuestionKind::MixedExpression => "mixed-expression",
            QuestionKind::TruthTable => "truth-table",
            QuestionKind::VariableAssignment => "variable-assignment",
            QuestionKind::VariableScope => "variable-scope",
            QuestionKind::VariableState => "variable-state",
        }
    }

    pub fn id_prefix(self) -> &'static str {
        match self {
            QuestionKind::Loop => "gen_loop",
            QuestionKind::OffByOne => "off_by_one",
            QuestionKind::BooleanExpression => "bool_expr",
            QuestionKind::NumericExpression => "num_expr",
            QuestionKind::MixedExpression => "mixed_expr",
            QuestionKind::TruthTable => "truth_table",
            QuestionKind::VariableAssignment => "var_assign",
            QuestionKind::VariableScope => "var_scope",
            QuestionKind::VariableState => "var_state",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            QuestionKind::Loop => "apply_code.md",
            QuestionKind::OffByOne => "loop_off_by_one_concept.md",
            QuestionKind::BooleanExpression => "boolean_expression.md",
            QuestionKind::NumericExpression => "numeric_expression.md",
            QuestionKind::MixedExpression => "mixed_expression.md",
            QuestionKind::TruthTable => "truth_table.md",
            QuestionKind::VariableAssignment => "variable_assignment_equality.md",
            QuestionKind::VariableScope => "variable_scope.md",
            QuestionKind::VariableState => "variable_state.md",
        }
    }

    pub fn topic(self) -> &'static str {
        match self {
            QuestionKind::Loop | QuestionKind::OffByOne => "loops",
            QuestionKind::BooleanExpression
            | QuestionKind::NumericExpression
            | QuestionKind::MixedExpression
            | QuestionKind::TruthTable => "expressions",
            QuestionKind::VariableAssignment
            | QuestionKind::VariableScope
            | QuestionKind::VariableState => "variables",
        }
    }

    pub fn bloom_level(self) -> BloomLevel {
        match self {
            QuestionKind::Loop => BloomLevel::Apply,
            _ => BloomLevel::Analyze,
        }
    }

    /// Produce a fresh draft of this kind.
    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R) -> QuestionDraft {
        match self {
            QuestionKind::Loop => loops::loop_question(rng),
            QuestionKind::OffByOne => loops::off_by_one_question(rng),
            QuestionKind::BooleanExpression => expressions::boolean_expression_question(rng),
            QuestionKind::NumericExpression => expressions::numeric_expression_question(rng),
            QuestionKind::MixedExpression => expressions::mixed_expression_question(rng),
            QuestionKind::TruthTable => truth_table::truth_table_question(rng),
            QuestionKind::VariableAssignment => variables::assignment_question(rng),
            QuestionKind::VariableScope => variables::scope_question(rng),
            QuestionKind::VariableState => variables::state_question(rng),
        }
    }
}

/// Renders drafts through the template store into the output directory.
#[derive(Debug, Clone)]
pub struct Generator {
    templates: TemplateStore,
    output_dir: PathBuf,
}

impl Generator {
    pub fn new(templates: TemplateStore, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    /// Fill the draft's template and write the question file.
    ///
    /// The header is validated before anything touches the disk.
    pub fn write(&self, draft: QuestionDraft) -> Result<PathBuf> {
        let QuestionDraft {
            mut frontmatter,
            template,
            replacements,
        } = draft;
        frontmatter.validate()?;

        let body = self.templates.render(template, &vars(replacements))?;
        if frontmatter.created.is_none() {
            frontmatter.created = Some(Utc::now());
        }

        debug!(id = %frontmatter.id, template, "rendered question");
        QuestionFile { frontmatter, body }.write_to_dir(&self.output_dir)
    }

    /// Generate one question of `kind` and write it.
    pub fn generate<R: Rng + ?Sized>(&self, kind: QuestionKind, rng: &mut R) -> Result<PathBuf> {
        self.write(kind.generate(rng))
    }
}
