//! Assignment assembly.
//!
//! Samples previously generated questions from the questions directory,
//! generates fresh programmatic questions, and concatenates them into one
//! markdown document. Section order is knowledge, programmatic, conceptual.

use crate::error::{QuizError, Result};
use crate::generators::{Generator, QuestionKind};
use crate::question::{BloomLevel, QuestionFile};
use crate::template::vars;
use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// How many questions of each type to include, and which pooled
/// questions are eligible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    pub num_knowledge_questions: usize,
    pub num_programmatic_questions: usize,
    pub num_conceptual_questions: usize,
    /// Only pooled questions with one of these topics are eligible.
    pub topics: Vec<String>,
    /// Only pooled questions at one of these levels are eligible.
    pub bloom_levels: Vec<BloomLevel>,
}

/// Kind of assignment section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    Knowledge,
    Programmatic,
    Conceptual,
}

impl FromStr for QuestionType {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "knowledge" => Ok(QuestionType::Knowledge),
            "programmatic" => Ok(QuestionType::Programmatic),
            "conceptual" => Ok(QuestionType::Conceptual),
            other => Err(QuizError::UserError(format!(
                "unknown question type: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::Knowledge => write!(f, "knowledge"),
            QuestionType::Programmatic => write!(f, "programmatic"),
            QuestionType::Conceptual => write!(f, "conceptual"),
        }
    }
}

/// Section template for a question type.
pub fn select_template(kind: QuestionType) -> &'static str {
    match kind {
        QuestionType::Knowledge => "assignment_knowledge.md",
        QuestionType::Programmatic => "assignment_programmatic.md",
        QuestionType::Conceptual => "assignment_conceptual.md",
    }
}

/// Load every question file in `dir`, in file name order.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_questions(dir: &Path) -> Result<Vec<QuestionFile>> {
    let mut questions = Vec::new();
    for path in crate::fs::list_markdown_files(dir)? {
        match QuestionFile::load(&path) {
            Ok(question) => questions.push(question),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable question"),
        }
    }
    debug!(dir = %dir.display(), count = questions.len(), "loaded question pool");
    Ok(questions)
}

impl AssignmentConfig {
    fn admits(&self, question: &QuestionFile) -> bool {
        let meta = &question.frontmatter.metadata;
        (self.topics.is_empty() || self.topics.iter().any(|t| *t == meta.topic))
            && (self.bloom_levels.is_empty() || self.bloom_levels.contains(&meta.bloom_level))
    }
}

/// Sample `amount` questions at `level` from the pool, without replacement.
fn sample_pool<'a, R: Rng + ?Sized>(
    pool: &'a [QuestionFile],
    level: BloomLevel,
    amount: usize,
    kind: QuestionType,
    rng: &mut R,
) -> Result<Vec<&'a QuestionFile>> {
    if amount == 0 {
        return Ok(Vec::new());
    }

    let candidates: Vec<&QuestionFile> = pool
        .iter()
        .filter(|q| q.frontmatter.metadata.bloom_level == level)
        .collect();

    if amount > candidates.len() {
        return Err(QuizError::UserError(format!(
            "requested {} {} question(s) but only {} available",
            amount,
            kind,
            candidates.len()
        )));
    }

    Ok(index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|i| candidates[i])
        .collect())
}

fn render_section(
    generator: &Generator,
    kind: QuestionType,
    question: &QuestionFile,
) -> Result<String> {
    let fm = &question.frontmatter;
    let section = generator.templates().render(
        select_template(kind),
        &vars([
            ("QUESTION_ID", fm.id.clone()),
            ("CONCEPT_TITLE", fm.title.clone().unwrap_or_default()),
            ("CODE_SNIPPET", fm.code_snippet.clone().unwrap_or_default()),
            ("QUESTION_TEXT", question.body.trim().to_string()),
        ]),
    )?;
    Ok(section.trim_end().to_string())
}

/// Build the assignment document and write it to `output`.
///
/// Pooled questions come from the generator's output directory, which is
/// also where fresh programmatic questions are written.
pub fn create_assignment<R: Rng + ?Sized>(
    config: &AssignmentConfig,
    generator: &Generator,
    output: &Path,
    rng: &mut R,
) -> Result<PathBuf> {
    let pooled = config.num_knowledge_questions + config.num_conceptual_questions;
    let pool: Vec<QuestionFile> = if pooled > 0 {
        load_questions(generator.output_dir())?
            .into_iter()
            .filter(|q| config.admits(q))
            .collect()
    } else {
        Vec::new()
    };

    let knowledge = sample_pool(
        &pool,
        BloomLevel::Knowledge,
        config.num_knowledge_questions,
        QuestionType::Knowledge,
        rng,
    )?;
    let conceptual = sample_pool(
        &pool,
        BloomLevel::Analyze,
        config.num_conceptual_questions,
        QuestionType::Conceptual,
        rng,
    )?;

    let mut programmatic = Vec::with_capacity(config.num_programmatic_questions);
    for _ in 0..config.num_programmatic_questions {
        let path = generator.generate(QuestionKind::Loop, rng)?;
        programmatic.push(QuestionFile::load(&path)?);
    }

    let mut document = String::from("# Assignment\n\n");
    let sections = knowledge
        .into_iter()
        .map(|q| (QuestionType::Knowledge, q))
        .chain(programmatic.iter().map(|q| (QuestionType::Programmatic, q)))
        .chain(conceptual.into_iter().map(|q| (QuestionType::Conceptual, q)));
    for (kind, question) in sections {
        document.push_str(&render_section(generator, kind, question)?);
        document.push_str("\n\n");
    }

    crate::fs::atomic_write_file(output, &document)?;
    info!(
        path = %output.display(),
        knowledge = config.num_knowledge_questions,
        programmatic = config.num_programmatic_questions,
        conceptual = config.num_conceptual_questions,
        "wrote assignment"
    );
    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{QuestionFrontmatter, QuestionMetadata};
    use crate::template::TemplateStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn shipped_templates() -> TemplateStore {
        TemplateStore::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("templates"))
    }

    fn write_question(dir: &Path, id: &str, topic: &str, level: BloomLevel, body: &str) {
        let mut frontmatter =
            QuestionFrontmatter::new(id, QuestionMetadata::new(topic, level, 1, &["t"]));
        if level == BloomLevel::Knowledge {
            frontmatter.title = Some(format!("Title of {}", id));
        }
        QuestionFile {
            frontmatter,
            body: body.to_string(),
        }
        .write_to_dir(dir)
        .unwrap();
    }

    fn seeded_pool(dir: &Path) {
        write_question(dir, "def_array", "definitions", BloomLevel::Knowledge, "Define array.\n");
        write_question(dir, "def_loop", "definitions", BloomLevel::Knowledge, "Define loop.\n");
        write_question(dir, "bool_expr_1111", "expressions", BloomLevel::Analyze, "Evaluate.\n");
        write_question(dir, "var_scope_2222", "variables", BloomLevel::Analyze, "Trace scope.\n");
    }

    #[test]
    fn test_question_type_from_str() {
        assert_eq!("knowledge".parse::<QuestionType>().unwrap(), QuestionType::Knowledge);
        assert_eq!(" Programmatic ".parse::<QuestionType>().unwrap(), QuestionType::Programmatic);
        assert_eq!("conceptual".parse::<QuestionType>().unwrap(), QuestionType::Conceptual);

        let err = "essay".parse::<QuestionType>().unwrap_err();
        assert!(err.to_string().contains("unknown question type"));
    }

    #[test]
    fn test_select_template() {
        assert_eq!(select_template(QuestionType::Knowledge), "assignment_knowledge.md");
        assert_eq!(select_template(QuestionType::Programmatic), "assignment_programmatic.md");
        assert_eq!(select_template(QuestionType::Conceptual), "assignment_conceptual.md");
    }

    #[test]
    fn test_load_questions_sorted_and_skips_bad_files() {
        let temp_dir = TempDir::new().unwrap();
        seeded_pool(temp_dir.path());
        std::fs::write(temp_dir.path().join("broken.md"), "not a question\n").unwrap();
        std::fs::write(temp_dir.path().join("readme.txt"), "ignored").unwrap();

        let questions = load_questions(temp_dir.path()).unwrap();
        let ids: Vec<&str> = questions.iter().map(|q| q.frontmatter.id.as_str()).collect();
        assert_eq!(ids, vec!["bool_expr_1111", "def_array", "def_loop", "var_scope_2222"]);
    }

    #[test]
    fn test_load_questions_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_questions(&temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_create_assignment_full() {
        let temp_dir = TempDir::new().unwrap();
        let questions = temp_dir.path().join("questions");
        seeded_pool(&questions);
        let generator = Generator::new(shipped_templates(), &questions);
        let config = AssignmentConfig {
            num_knowledge_questions: 2,
            num_programmatic_questions: 1,
            num_conceptual_questions: 1,
            ..Default::default()
        };
        let output = temp_dir.path().join("out/assignment.md");

        let path = create_assignment(&config, &generator, &output, &mut StdRng::seed_from_u64(3))
            .unwrap();
        let document = std::fs::read_to_string(&path).unwrap();

        assert!(document.starts_with("# Assignment\n\n"));
        assert!(document.ends_with("\n\n"));
        assert!(document.contains("Title of def_array"));
        assert!(document.contains("Title of def_loop"));
        assert!(document.contains("Define array."));
        assert!(document.contains("```csharp"));
        assert!(document.contains("Evaluate.") ^ document.contains("Trace scope."));
        assert!(!document.contains("<<"));

        // The fresh loop question lands in the pool directory.
        let pool = load_questions(&questions).unwrap();
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn test_create_assignment_too_many_requested() {
        let temp_dir = TempDir::new().unwrap();
        seeded_pool(temp_dir.path());
        let generator = Generator::new(shipped_templates(), temp_dir.path());
        let config = AssignmentConfig {
            num_knowledge_questions: 3,
            ..Default::default()
        };

        let err = create_assignment(
            &config,
            &generator,
            &temp_dir.path().join("a.md"),
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap_err();
        assert!(matches!(err, QuizError::UserError(_)));
        assert!(err.to_string().contains("only 2 available"));
        assert!(!temp_dir.path().join("a.md").exists());
    }

    #[test]
    fn test_create_assignment_applies_filters() {
        let temp_dir = TempDir::new().unwrap();
        seeded_pool(temp_dir.path());
        let generator = Generator::new(shipped_templates(), temp_dir.path());
        let output = temp_dir.path().join("assignment.out");

        let config = AssignmentConfig {
            num_conceptual_questions: 1,
            topics: vec!["variables".to_string()],
            ..Default::default()
        };
        create_assignment(&config, &generator, &output, &mut StdRng::seed_from_u64(9)).unwrap();
        let document = std::fs::read_to_string(&output).unwrap();
        assert!(document.contains("Trace scope."));
        assert!(!document.contains("Evaluate."));

        let config = AssignmentConfig {
            num_conceptual_questions: 1,
            bloom_levels: vec![BloomLevel::Knowledge],
            ..Default::default()
        };
        assert!(
            create_assignment(&config, &generator, &output, &mut StdRng::seed_from_u64(9))
                .is_err()
        );
    }

    #[test]
    fn test_programmatic_only_needs_no_pool() {
        let temp_dir = TempDir::new().unwrap();
        let questions = temp_dir.path().join("fresh");
        let generator = Generator::new(shipped_templates(), &questions);
        let config = AssignmentConfig {
            num_programmatic_questions: 2,
            ..Default::default()
        };

        let output = temp_dir.path().join("assignment.md");
        create_assignment(&config, &generator, &output, &mut StdRng::seed_from_u64(4)).unwrap();

        let document = std::fs::read_to_string(&output).unwrap();
        assert_eq!(document.matches("```csharp").count(), 2);
    }

    #[test]
    fn test_empty_assignment() {
        let temp_dir = TempDir::new().unwrap();
        let generator = Generator::new(shipped_templates(), temp_dir.path().join("none"));
        let output = temp_dir.path().join("assignment.md");

        create_assignment(
            &AssignmentConfig::default(),
            &generator,
            &output,
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "# Assignment\n\n");
    }
}
