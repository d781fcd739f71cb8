//! All error types for the stringsheet crate.
//!
//! Line-level errors ([`Error::MalformedQuoting`]) are recoverable: the
//! [`crate::Converter`] collects them per line. Resource errors
//! ([`Error::MissingInput`], [`Error::OutputWrite`]) abort a whole document.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A quoted value was opened but never closed, or scanning ran past the
    /// end of the line while still expecting a token.
    #[error("malformed quoting at column {column}: {reason}")]
    MalformedQuoting { column: usize, reason: String },

    /// A line-level error annotated with its 1-based line number.
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        content: String,
        #[source]
        source: Box<Error>,
    },

    #[error("cannot read input `{}`: {source}", .path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output `{}`: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown direction `{0}`")]
    UnknownDirection(String),

    #[error("cannot infer conversion direction: {0}")]
    DirectionInference(String),
}

impl Error {
    /// Creates a new malformed quoting error at the given 0-based column.
    pub fn malformed(column: usize, reason: impl Into<String>) -> Self {
        Error::MalformedQuoting {
            column,
            reason: reason.into(),
        }
    }

    /// Wraps a line-level error with its line number and raw content.
    pub fn at_line(self, line: usize, content: impl Into<String>) -> Self {
        Error::Line {
            line,
            content: content.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_malformed_quoting_error() {
        let error = Error::malformed(4, "unterminated quoted cell");
        assert_eq!(
            error.to_string(),
            "malformed quoting at column 4: unterminated quoted cell"
        );
    }

    #[test]
    fn test_line_error_wraps_source() {
        let error = Error::malformed(0, "missing closing quote").at_line(7, "\"key = \"v\";");
        assert_eq!(
            error.to_string(),
            "line 7: malformed quoting at column 0: missing closing quote"
        );
        match &error {
            Error::Line { line, content, .. } => {
                assert_eq!(*line, 7);
                assert_eq!(content, "\"key = \"v\";");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_missing_input_error() {
        let error = Error::MissingInput {
            path: PathBuf::from("input.strings"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(error.to_string().contains("cannot read input `input.strings`"));
    }

    #[test]
    fn test_output_write_error() {
        let error = Error::OutputWrite {
            path: PathBuf::from("out/output.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("cannot write output `out/output.csv`"));
    }

    #[test]
    fn test_unknown_direction_error() {
        let error = Error::UnknownDirection("sideways".to_string());
        assert_eq!(error.to_string(), "unknown direction `sideways`");
    }
}
