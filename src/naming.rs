//! Question identifiers and file naming.
//!
//! Generated questions are named `<prefix>_<NNNN>` with a random four-digit
//! suffix; definition questions are named after their sanitized concept
//! title. Neither scheme guarantees uniqueness.

use crate::error::{QuizError, Result};
use rand::Rng;

/// Inclusive range of the random numeric id suffix.
pub const ID_SUFFIX_RANGE: std::ops::RangeInclusive<u32> = 1000..=9999;

/// Build a random question id such as `num_expr_4821`.
pub fn random_id<R: Rng + ?Sized>(prefix: &str, rng: &mut R) -> String {
    format!("{}_{}", prefix, rng.random_range(ID_SUFFIX_RANGE))
}

/// Sanitize a concept title for use in a question id.
///
/// Lowercases the title and replaces every character outside `[a-z0-9]`
/// with `_`, one underscore per character.
pub fn sanitize_title(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Build the id of a definition question, e.g. `def_loop_invariant`.
pub fn definition_id(title: &str) -> String {
    format!("def_{}", sanitize_title(title))
}

/// Validate that a file name or template name cannot escape its directory.
pub fn validate_filename_safe(filename: &str) -> Result<()> {
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(QuizError::UserError(format!(
            "'{}' is not a safe file name: contains path traversal characters",
            filename
        )));
    }

    if filename.starts_with('.') {
        return Err(QuizError::UserError(format!(
            "'{}' is not a safe file name: starts with '.'",
            filename
        )));
    }

    Ok(())
}
