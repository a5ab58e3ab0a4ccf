//! Definition extraction from textbook markdown.
//!
//! A definition is written as an abstract callout whose first nested
//! callout is a definition:
//!
//! ```text
//! >[!abstract] Loop Invariant
//! >>[!definition]
//! A condition that holds before and after every iteration.
//!
//! >[!note] Next block
//! ```
//!
//! The body runs until the next line that opens a callout (`>[!` or
//! `>>[!`) or the end of the document.

use crate::error::{QuizError, Result};
use crate::generators::Generator;
use crate::generators::definition::definition_question;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

/// Matches the abstract header and the definition line that follows it.
static DEFINITION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)>\[!abstract\][ \t]*([^\n]+)\n+>>\[!definition\][^\n]*\n")
        .expect("definition header regex is valid")
});

/// A concept title and its definition text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub title: String,
    pub body: String,
}

fn opens_callout(line: &str) -> bool {
    let rest = line
        .strip_prefix(">>")
        .or_else(|| line.strip_prefix('>'));
    rest.is_some_and(|r| r.starts_with("[!"))
}

/// Extract every definition in `content`, in document order.
///
/// Definitions with an empty title or body are skipped.
pub fn extract_definitions(content: &str) -> Vec<Definition> {
    let normalized = content.replace("\r\n", "\n");
    let mut definitions = Vec::new();
    let mut pos = 0;

    while let Some(caps) = DEFINITION_HEADER.captures(&normalized[pos..]) {
        let (Some(whole), Some(title)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let title = title.as_str().trim().to_string();
        let body_start = pos + whole.end();

        let mut body_end = body_start;
        for line in normalized[body_start..].split_inclusive('\n') {
            if opens_callout(line) {
                break;
            }
            body_end += line.len();
        }

        let body = normalized[body_start..body_end].trim().to_string();
        if title.is_empty() || body.is_empty() {
            debug!(title = %title, "skipping definition with empty title or body");
        } else {
            debug!(title = %title, body_len = body.len(), "found definition");
            definitions.push(Definition { title, body });
        }

        pos = body_end;
    }

    definitions
}

/// Read a markdown file and extract its definitions.
pub fn extract_definitions_from_file(path: &Path) -> Result<Vec<Definition>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        QuizError::IoError(format!("failed to read '{}': {}", path.display(), e))
    })?;
    let definitions = extract_definitions(&content);
    debug!(path = %path.display(), count = definitions.len(), "scanned file");
    Ok(definitions)
}

/// Turn every definition in the textbook directory into a question file.
///
/// Files are scanned in name order; subdirectories are not searched.
pub fn process_textbook(textbook_dir: &Path, generator: &Generator) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for file in crate::fs::list_markdown_files(textbook_dir)? {
        let definitions = extract_definitions_from_file(&file)?;
        info!(
            file = %file.display(),
            definitions = definitions.len(),
            "processing textbook file"
        );
        for definition in &definitions {
            written.push(generator.write(definition_question(definition))?);
        }
    }

    Ok(written)
}
