//! Error types for entitydeps operations.
//!
//! This module provides the error hierarchy using `thiserror` for tree
//! construction, frame assembly, analyzer calls, I/O, and CLI commands.
//! Malformed input (cyclic heads, identity collisions, oversized sequences)
//! is kept apart from the normal "nothing found" outcomes, which are plain
//! `Option`s and empty iterators rather than errors.

use thiserror::Error;

/// Result type alias for entitydeps operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error produced by an external analyzer, passed through untouched.
pub type TokenizeError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Dependency tree construction failed on malformed input.
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    /// Frame assembly errors (entity spans).
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// I/O errors (file operations, JSON input).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Failure reported by the external analyzer.
    #[error(transparent)]
    Tokenizer(TokenizeError),
}

impl Error {
    /// Returns `true` if the error signals malformed upstream data.
    ///
    /// Callers should treat these as data-quality bugs, never as an empty
    /// result.
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Tree(_) | Self::Frame(_))
    }
}

/// Errors raised while building a dependency tree.
///
/// Every variant aborts construction of the whole tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A token was reached twice while following head edges.
    #[error("cyclic dependency at token offset {offset}")]
    CyclicDependency {
        /// Begin offset of the token that closed the cycle.
        offset: i32,
    },

    /// Two tokens in the same tree share a begin offset.
    #[error("duplicate token identity {offset}")]
    DuplicateIdentity {
        /// The shared begin offset.
        offset: i32,
    },

    /// Offset plus token count leaves the 32-bit identity space.
    #[error("{count} tokens at offset {offset} exceed the 32-bit token limit")]
    TooManyTokens {
        /// Head-index offset supplied by the caller.
        offset: i32,
        /// Number of tokens in the sequence.
        count: usize,
    },
}

/// Errors raised while assembling frames.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Entity span reaches past the frame's tokens.
    #[error("entity span {start}..{end} out of bounds for {len} tokens")]
    EntityOutOfBounds {
        /// Span start position.
        start: usize,
        /// Span end position (exclusive).
        end: usize,
        /// Number of tokens in the frame.
        len: usize,
    },

    /// Entity span is empty or overlaps an already marked span.
    #[error("invalid entity span {start}..{end}")]
    InvalidEntitySpan {
        /// Span start position.
        start: usize,
        /// Span end position (exclusive).
        end: usize,
    },
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Malformed JSON input.
    #[error("invalid JSON: {0}")]
    Json(String),

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArgument(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<serde_json::Error> for IoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_error_display() {
        let err = TreeError::CyclicDependency { offset: 7 };
        assert!(err.to_string().contains("cyclic"));
        assert!(err.to_string().contains('7'));

        let err = TreeError::TooManyTokens {
            offset: i32::MAX,
            count: 2,
        };
        assert!(err.to_string().contains("32-bit"));

        let err = TreeError::DuplicateIdentity { offset: 3 };
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_frame_error_display() {
        let err = FrameError::EntityOutOfBounds {
            start: 4,
            end: 9,
            len: 6,
        };
        assert!(err.to_string().contains("4..9"));
        assert!(err.to_string().contains('6'));

        let err = FrameError::InvalidEntitySpan { start: 2, end: 2 };
        assert!(err.to_string().contains("2..2"));
    }

    #[test]
    fn test_malformed_input_category() {
        let err: Error = TreeError::CyclicDependency { offset: 0 }.into();
        assert!(err.is_malformed_input());

        let err: Error = FrameError::InvalidEntitySpan { start: 0, end: 0 }.into();
        assert!(err.is_malformed_input());

        let err: Error = IoError::Generic("boom".to_string()).into();
        assert!(!err.is_malformed_input());
    }

    #[test]
    fn test_tokenizer_error_is_transparent() {
        let upstream: TokenizeError = "quota exceeded".into();
        let err = Error::Tokenizer(upstream);
        assert_eq!(err.to_string(), "quota exceeded");
        assert!(!err.is_malformed_input());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Io(IoError::Json(_))));
    }

    #[test]
    fn test_from_std_io_error() {
        let io_err = std::io::Error::other("disk");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(IoError::Generic(_))));
    }
}
