//! Question file model for quizgen.
//!
//! Every generated question is a markdown file with YAML frontmatter
//! followed by the filled template body:
//!
//! ```text
//! ---
//! id: gen_loop_4821
//! question_text: Explain what this loop does for i = 3 to 11.
//! metadata:
//!   topic: loops
//!   bloom_level: apply
//!   difficulty: 2
//!   tags:
//!   - loops
//!   - iteration
//! ---
//!
//! ## Apply: Code Analysis
//! ...
//! ```
//!
//! Unknown frontmatter fields are preserved so hand-edited question files
//! survive a load/save cycle.

use crate::error::{QuizError, Result};
use crate::naming::validate_filename_safe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

mod io;

/// Highest difficulty score a question may carry.
pub const MAX_DIFFICULTY: u8 = 5;

/// A parsed question file with frontmatter and markdown body.
#[derive(Debug, Clone)]
pub struct QuestionFile {
    /// The parsed frontmatter fields.
    pub frontmatter: QuestionFrontmatter,
    /// The markdown body after the blank line that follows the closing `---`.
    pub body: String,
}

/// Question frontmatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionFrontmatter {
    /// Question identifier, also the output file stem.
    pub id: String,

    /// Concept title (definition questions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Short prompt shown alongside the code (loop questions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,

    /// Fenced code block the question is about (loop questions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,

    /// When the question was generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    pub metadata: QuestionMetadata,

    /// Any fields not explicitly defined above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Classification metadata carried by every question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionMetadata {
    /// Course topic (e.g., "loops", "expressions").
    pub topic: String,

    /// Cognitive level the question targets.
    pub bloom_level: BloomLevel,

    /// Difficulty score, 1 (easiest) to [`MAX_DIFFICULTY`].
    pub difficulty: u8,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Bloom's taxonomy level of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloomLevel {
    /// Recall of definitions and terminology.
    Knowledge,
    /// Using a concept on concrete code.
    Apply,
    /// Tracing, debugging, and explaining behavior.
    Analyze,
}

impl BloomLevel {
    /// Parse a bloom level from its lowercase name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "knowledge" => Some(Self::Knowledge),
            "apply" => Some(Self::Apply),
            "analyze" => Some(Self::Analyze),
            _ => None,
        }
    }
}

impl fmt::Display for BloomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BloomLevel::Knowledge => write!(f, "knowledge"),
            BloomLevel::Apply => write!(f, "apply"),
            BloomLevel::Analyze => write!(f, "analyze"),
        }
    }
}

impl QuestionMetadata {
    /// Build metadata from static tag names.
    pub fn new(topic: &str, bloom_level: BloomLevel, difficulty: u8, tags: &[&str]) -> Self {
        Self {
            topic: topic.to_string(),
            bloom_level,
            difficulty,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl QuestionFrontmatter {
    /// Frontmatter with only the required fields set.
    pub fn new(id: impl Into<String>, metadata: QuestionMetadata) -> Self {
        Self {
            id: id.into(),
            title: None,
            question_text: None,
            code_snippet: None,
            created: None,
            metadata,
            extra: BTreeMap::new(),
        }
    }

    /// Check that the header is complete and well-formed.
    ///
    /// Rules:
    /// - `id` is non-empty and usable as a file name
    /// - `metadata.topic` is non-empty
    /// - `metadata.difficulty` is within `1..=MAX_DIFFICULTY`
    /// - `metadata.tags` is non-empty and has no blank entries
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(QuizError::FormatError("question id is empty".to_string()));
        }
        validate_filename_safe(&self.id)
            .map_err(|e| QuizError::FormatError(format!("question id '{}': {}", self.id, e)))?;

        if self.metadata.topic.trim().is_empty() {
            return Err(QuizError::FormatError(format!(
                "question '{}' has an empty topic",
                self.id
            )));
        }

        if !(1..=MAX_DIFFICULTY).contains(&self.metadata.difficulty) {
            return Err(QuizError::FormatError(format!(
                "question '{}' has difficulty {}, expected 1-{}",
                self.id, self.metadata.difficulty, MAX_DIFFICULTY
            )));
        }

        if self.metadata.tags.is_empty() {
            return Err(QuizError::FormatError(format!(
                "question '{}' has no tags",
                self.id
            )));
        }
        if self.metadata.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(QuizError::FormatError(format!(
                "question '{}' has a blank tag",
                self.id
            )));
        }

        Ok(())
    }
}

impl QuestionFile {
    /// Parse a question file from its content string.
    ///
    /// Both LF and CRLF line endings are accepted; the body keeps its
    /// original line endings.
    pub fn parse(content: &str) -> Result<Self> {
        let normalized = content.replace("\r\n", "\n");
        let (frontmatter_yaml, body_start) = Self::extract_frontmatter(&normalized, content)?;

        let frontmatter: QuestionFrontmatter = serde_yaml::from_str(&frontmatter_yaml)
            .map_err(|e| {
                QuizError::FormatError(format!("failed to parse question frontmatter: {}", e))
            })?;

        let body = content.get(body_start..).unwrap_or_default().to_string();

        Ok(Self { frontmatter, body })
    }

    /// Extract frontmatter YAML and return the byte offset where the body starts.
    fn extract_frontmatter(normalized: &str, original: &str) -> Result<(String, usize)> {
        if !normalized.starts_with("---") {
            return Err(QuizError::FormatError(
                "question file must start with '---' frontmatter delimiter".to_string(),
            ));
        }

        let first_newline = normalized.find('\n').ok_or_else(|| {
            QuizError::FormatError("question file frontmatter is incomplete".to_string())
        })?;

        let rest = &normalized[first_newline + 1..];
        let closing_pos = rest.find("\n---").ok_or_else(|| {
            QuizError::FormatError(
                "question file missing closing '---' frontmatter delimiter".to_string(),
            )
        })?;

        let frontmatter_yaml = rest[..closing_pos].to_string();

        // +4 for "\n---"
        let normalized_body_start = first_newline + 1 + closing_pos + 4;
        let mut body_start = Self::find_original_position(original, normalized_body_start);

        // The delimiter line ending, then the blank separator line.
        for _ in 0..2 {
            let remaining = original.get(body_start..).unwrap_or_default();
            if remaining.starts_with("\r\n") {
                body_start += 2;
            } else if remaining.starts_with('\n') {
                body_start += 1;
            }
        }

        Ok((frontmatter_yaml, body_start))
    }

    /// Map a byte offset in the LF-normalized content back to the original content.
    fn find_original_position(original: &str, normalized_pos: usize) -> usize {
        let bytes = original.as_bytes();
        let mut orig_pos = 0;
        let mut norm_pos = 0;

        while norm_pos < normalized_pos && orig_pos < bytes.len() {
            if orig_pos + 1 < bytes.len() && bytes[orig_pos] == b'\r' && bytes[orig_pos + 1] == b'\n'
            {
                orig_pos += 2;
            } else {
                orig_pos += 1;
            }
            norm_pos += 1;
        }

        orig_pos
    }
}
