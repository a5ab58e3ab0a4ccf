//! Error types for the quizgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for quizgen operations.
///
/// Each variant maps to a specific exit code (see [`exit_codes`]).
#[derive(Error, Debug)]
pub enum QuizError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A template could not be located or read.
    #[error("Template error: {0}")]
    TemplateError(String),

    /// A filesystem read or write failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A question file has a malformed or incomplete header.
    #[error("Malformed question: {0}")]
    FormatError(String),
}

impl QuizError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            QuizError::UserError(_) => exit_codes::USER_ERROR,
            QuizError::TemplateError(_) => exit_codes::TEMPLATE_FAILURE,
            QuizError::IoError(_) => exit_codes::IO_FAILURE,
            QuizError::FormatError(_) => exit_codes::FORMAT_FAILURE,
        }
    }
}

/// Result type alias for quizgen operations.
pub type Result<T> = std::result::Result<T, QuizError>;
