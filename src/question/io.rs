//! File I/O operations for question files.

use super::QuestionFile;
use crate::error::{QuizError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

impl QuestionFile {
    /// Load a question file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            QuizError::IoError(format!(
                "failed to read question file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content).map_err(|e| match e {
            QuizError::FormatError(msg) => {
                QuizError::FormatError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Atomically save the question file to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_string()?;
        crate::fs::atomic_write_file(path, &content)
    }

    /// Validate the header and write the question to `<dir>/<id>.md`.
    ///
    /// An existing file with the same id is overwritten.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        self.frontmatter.validate()?;

        let path = dir.join(format!("{}.md", self.frontmatter.id));
        if path.exists() {
            warn!(path = %path.display(), "overwriting existing question file");
        }

        self.save(&path)?;
        info!(id = %self.frontmatter.id, path = %path.display(), "wrote question");
        Ok(path)
    }

    /// Serialize the question file to a string.
    ///
    /// Layout: `---`, the YAML header, `---`, a blank line, then the body.
    pub fn to_string(&self) -> Result<String> {
        let frontmatter_yaml = serde_yaml::to_string(&self.frontmatter).map_err(|e| {
            QuizError::FormatError(format!("failed to serialize question frontmatter: {}", e))
        })?;

        let mut output = String::with_capacity(frontmatter_yaml.len() + self.body.len() + 9);
        output.push_str("---\n");
        output.push_str(&frontmatter_yaml);
        output.push_str("---\n\n");
        output.push_str(&self.body);

        Ok(output)
    }
}
