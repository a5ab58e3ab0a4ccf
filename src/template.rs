//! Template loading and placeholder substitution.
//!
//! Templates are markdown files in the templates directory containing
//! `<<NAME>>` placeholders, where `NAME` is made of ASCII letters, digits,
//! and underscores.
//!
//! # Substitution rules
//!
//! - `<<NAME>>` with a supplied value is replaced by that value
//! - `<<NAME>>` without a supplied value is left verbatim
//! - anything else that merely looks like a delimiter (`<<`, `a << b`,
//!   `<<not a name>>`) is copied unchanged
//!
//! Substitution is a single left-to-right pass, so values are never
//! rescanned for placeholders.

use crate::error::{QuizError, Result};
use crate::naming::validate_filename_safe;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

const OPEN: &str = "<<";
const CLOSE: &str = ">>";

/// Read-only access to the templates directory.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read a template's raw text by file name (e.g. `apply_code.md`).
    pub fn load(&self, name: &str) -> Result<String> {
        validate_filename_safe(name).map_err(|e| QuizError::TemplateError(e.to_string()))?;

        let path = self.dir.join(name);
        std::fs::read_to_string(&path).map_err(|e| {
            QuizError::TemplateError(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Load a template and fill it, logging any placeholder left unfilled.
    pub fn render(&self, name: &str, variables: &HashMap<String, String>) -> Result<String> {
        let template = self.load(name)?;
        let unfilled: Vec<String> = placeholders(&template)
            .into_iter()
            .filter(|p| !variables.contains_key(p))
            .collect();
        if !unfilled.is_empty() {
            debug!(template = name, ?unfilled, "placeholders left unfilled");
        }
        Ok(substitute_placeholders(&template, variables))
    }
}

/// Replace every `<<NAME>>` whose name is in `variables`.
pub fn substitute_placeholders(template: &str, variables: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        match parse_token(after_open) {
            Some(name) => {
                let token_len = OPEN.len() + name.len() + CLOSE.len();
                match variables.get(name) {
                    Some(value) => result.push_str(value),
                    None => result.push_str(&rest[start..start + token_len]),
                }
                rest = &rest[start + token_len..];
            }
            None => {
                // Emit one '<' so that "<<<NAME>>" still finds the token.
                result.push('<');
                rest = &rest[start + 1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// Distinct placeholder names in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        match parse_token(after_open) {
            Some(name) => {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
                rest = &after_open[name.len() + CLOSE.len()..];
            }
            None => rest = &rest[start + 1..],
        }
    }

    names
}

/// Parse `NAME>>` at the start of `s`, returning `NAME`.
fn parse_token(s: &str) -> Option<&str> {
    let end = s.find(CLOSE)?;
    let name = &s[..end];
    if !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        Some(name)
    } else {
        None
    }
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_simple_substitution() {
        let vars = vars([("NAME", "Alice"), ("GREETING", "Hello")]);
        let result = substitute_placeholders("<<GREETING>>, <<NAME>>!", &vars);
        assert_eq!(result, "Hello, Alice!");
    }

    #[test]
    fn test_no_placeholders_is_identity() {
        let vars = vars([("X", "value")]);
        for input in [
            "",
            "Just plain text",
            "x << 2 and y >> 1",
            "> quoted\n>> nested quote",
            "<<",
            ">>",
            "<<lower case>>",
            "<<<>>>",
        ] {
            let once = substitute_placeholders(input, &vars);
            assert_eq!(once, input);
            assert_eq!(substitute_placeholders(&once, &vars), once);
        }
    }

    #[test]
    fn test_unmatched_placeholder_left_verbatim() {
        let vars = vars([("KNOWN", "yes")]);
        let result = substitute_placeholders("<<KNOWN>> <<UNKNOWN>>", &vars);
        assert_eq!(result, "yes <<UNKNOWN>>");
    }

    #[test]
    fn test_multiple_occurrences() {
        let vars = vars([("X", "X")]);
        assert_eq!(substitute_placeholders("<<X>>-<<X>>-<<X>>", &vars), "X-X-X");
    }

    #[test]
    fn test_adjacent_placeholders() {
        let vars = vars([("A", "a"), ("B", "b")]);
        assert_eq!(substitute_placeholders("<<A>><<B>>", &vars), "ab");
    }

    #[test]
    fn test_extra_opening_bracket() {
        let vars = vars([("A", "a")]);
        assert_eq!(substitute_placeholders("<<<A>>", &vars), "<a");
    }

    #[test]
    fn test_unterminated_placeholder() {
        let vars = vars([("A", "a")]);
        assert_eq!(substitute_placeholders("start <<A", &vars), "start <<A");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let vars = vars([("A", "<<B>>"), ("B", "b")]);
        assert_eq!(substitute_placeholders("<<A>>", &vars), "<<B>>");
    }

    #[test]
    fn test_multiline_values_and_unicode() {
        let vars = vars([("CODE", "int x = 5;\nint y = 7;"), ("T", "日本語")]);
        let result = substitute_placeholders("```\n<<CODE>>\n```\n<<T>>", &vars);
        assert_eq!(result, "```\nint x = 5;\nint y = 7;\n```\n日本語");
    }

    #[test]
    fn test_empty_value() {
        let vars = vars([("EMPTY", "")]);
        assert_eq!(substitute_placeholders("a<<EMPTY>>b", &vars), "ab");
    }

    #[test]
    fn test_placeholders_in_order_distinct() {
        let names = placeholders("<<B>> x <<A>> <<B>> <<not valid>> <<C_1>>");
        assert_eq!(names, vec!["B", "A", "C_1"]);
    }

    #[test]
    fn test_placeholders_none() {
        assert!(placeholders("plain a << b >> c").is_empty());
    }

    #[test]
    fn test_store_load_and_render() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("greeting.md"),
            "# <<TITLE>>\n\n<<BODY>> <<MISSING>>\n",
        )
        .unwrap();
        let store = TemplateStore::new(temp_dir.path());

        let rendered = store
            .render("greeting.md", &vars([("TITLE", "Loops"), ("BODY", "text")]))
            .unwrap();

        assert_eq!(rendered, "# Loops\n\ntext <<MISSING>>\n");
    }

    #[test]
    fn test_store_missing_template() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::new(temp_dir.path());

        let err = store.load("apply_code.md").unwrap_err();
        assert!(matches!(err, QuizError::TemplateError(_)));
        assert!(err.to_string().contains("apply_code.md"));
    }

    #[test]
    fn test_store_rejects_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::new(temp_dir.path());

        let err = store.load("../secret.md").unwrap_err();
        assert!(matches!(err, QuizError::TemplateError(_)));
    }
}
