//! Error types for dot notation parsing and serialization.
//!
//! ## Error Categories
//!
//! - **Malformed lines**: an input line with no key/value separator at all
//! - **Invalid indexes**: bracket content that is not a non-negative integer
//! - **Custom errors**: raised by Serde `Serialize`/`Deserialize` impls
//! - **I/O errors**: reader/writer failures
//!
//! Parse errors carry the 1-based line number and the offending text, so a
//! caller can point at the exact input line. Parsing stops at the first bad
//! line.
//!
//! ## Examples
//!
//! ```rust
//! use dotpath::{parse, Error};
//!
//! let result = parse("this line has no separator");
//! match result {
//!     Err(Error::MalformedLine { line, .. }) => assert_eq!(line, 1),
//!     other => panic!("expected a malformed line error, got {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing or serializing
/// dot notation.
///
/// Each error variant includes the context needed to locate the problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A line with no key/value separator
    #[error("line {line}: no key/value separator in {text:?}")]
    MalformedLine { line: usize, text: String },

    /// A path segment whose bracket content is not a non-negative integer
    #[error("line {line}: invalid index {index:?} in segment {segment:?}")]
    InvalidIndex {
        line: usize,
        segment: String,
        index: String,
    },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised from Serde impls
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed line error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::Error;
    ///
    /// let err = Error::malformed_line(10, "novalue");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn malformed_line(line: usize, text: &str) -> Self {
        Error::MalformedLine {
            line,
            text: text.to_string(),
        }
    }

    /// Creates an invalid index error for a path segment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::Error;
    ///
    /// let err = Error::invalid_index(1, "a[x]", "x");
    /// assert!(err.to_string().contains("invalid index"));
    /// ```
    pub fn invalid_index(line: usize, segment: &str, index: &str) -> Self {
        Error::InvalidIndex {
            line,
            segment: segment.to_string(),
            index: index.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the 1-based input line this error points at, if it is a parse
    /// error.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MalformedLine { line, .. } | Error::InvalidIndex { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
