//! Config struct definition and default implementation.

use crate::assignment::AssignmentConfig;
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "quizgen.yaml";

/// Configuration for quizgen.
///
/// This struct represents the contents of `quizgen.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Paths
    // =========================================================================
    /// Directory holding the question and section templates.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Directory generated questions are written to (and pooled from).
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory of markdown sources scanned by `extract`.
    #[serde(default = "default_textbook_dir")]
    pub textbook_dir: String,

    /// Where `assignment` writes its document.
    #[serde(default = "default_assignment_path")]
    pub assignment_path: String,

    // =========================================================================
    // Assignment
    // =========================================================================
    /// Question counts and pool filters for `assignment`.
    #[serde(default = "default_assignment")]
    pub assignment: AssignmentConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            output_dir: default_output_dir(),
            textbook_dir: default_textbook_dir(),
            assignment_path: default_assignment_path(),
            assignment: default_assignment(),
        }
    }
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_output_dir() -> String {
    "questions".to_string()
}

fn default_textbook_dir() -> String {
    "textbook".to_string()
}

fn default_assignment_path() -> String {
    "assignment.md".to_string()
}

fn default_assignment() -> AssignmentConfig {
    AssignmentConfig {
        num_knowledge_questions: 1,
        num_programmatic_questions: 1,
        ..AssignmentConfig::default()
    }
}
