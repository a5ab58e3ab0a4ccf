//! Exit code constants for the quizgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, not enough questions)
//! - 2: Template failure (missing or unreadable template)
//! - 3: I/O failure (missing directory, read/write error)
//! - 4: Format failure (malformed question header)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or an unsatisfiable request.
pub const USER_ERROR: i32 = 1;

/// Template failure: the named template is missing or unreadable.
pub const TEMPLATE_FAILURE: i32 = 2;

/// I/O failure: a directory is missing or a file could not be read or written.
pub const IO_FAILURE: i32 = 3;

/// Format failure: a question file's frontmatter is malformed.
pub const FORMAT_FAILURE: i32 = 4;
