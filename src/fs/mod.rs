//! Filesystem utilities for quizgen.
//!
//! Atomic writes for generated documents and sorted listing of markdown
//! files, so that question pools are read in a stable order.

pub mod atomic;

pub use atomic::atomic_write_file;

use crate::error::{QuizError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// List the `.md` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. A missing or unreadable
/// directory is an error.
pub fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        QuizError::IoError(format!(
            "failed to read directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| QuizError::IoError(format!("failed to read directory entry: {}", e)))?;
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("md") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_markdown_files_sorted() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.md"), "b").unwrap();
        fs::write(temp_dir.path().join("a.md"), "a").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "skip").unwrap();
        fs::create_dir(temp_dir.path().join("nested.md")).unwrap();

        let files = list_markdown_files(temp_dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_list_markdown_files_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let err = list_markdown_files(&temp_dir.path().join("textbook")).unwrap_err();

        assert!(matches!(err, QuizError::IoError(_)));
        assert!(err.to_string().contains("textbook"));
    }
}
