//! Error types for the similardiff CLI.
//!
//! Uses thiserror for derive macros. Configuration problems are not errors
//! here: a missing or unreadable rules file degrades to an empty rule list.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for similardiff operations.
#[derive(Error, Debug)]
pub enum SimilarDiffError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// The comparison output does not follow the hunk grammar.
    #[error("malformed diff output: {0}")]
    ParseError(String),

    /// The comparison program failed to run or reported trouble.
    #[error("diff program failed: {0}")]
    DiffToolError(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimilarDiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SimilarDiffError::UserError(_) => exit_codes::USER_ERROR,
            SimilarDiffError::ParseError(_) => exit_codes::PARSE_FAILURE,
            SimilarDiffError::DiffToolError(_) => exit_codes::DIFF_TOOL_FAILURE,
            SimilarDiffError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for similardiff operations.
pub type Result<T> = std::result::Result<T, SimilarDiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = SimilarDiffError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn parse_error_has_correct_exit_code() {
        let err = SimilarDiffError::ParseError("short line".to_string());
        assert_eq!(err.exit_code(), exit_codes::PARSE_FAILURE);
    }

    #[test]
    fn diff_tool_error_has_correct_exit_code() {
        let err = SimilarDiffError::DiffToolError("exit code 2".to_string());
        assert_eq!(err.exit_code(), exit_codes::DIFF_TOOL_FAILURE);
    }

    #[test]
    fn io_error_converts_and_maps_exit_code() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: SimilarDiffError = io.into();
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SimilarDiffError::ParseError("line 4 is too short".to_string());
        assert_eq!(err.to_string(), "malformed diff output: line 4 is too short");

        let err = SimilarDiffError::DiffToolError("exit code 2: No such file".to_string());
        assert_eq!(err.to_string(), "diff program failed: exit code 2: No such file");
    }
}
