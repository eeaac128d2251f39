//! Error types for parsing, conversion, and encoding.
//!
//! Every failure mode in the crate maps to one variant of [`Error`], so a
//! caller can match on the kind of failure without string inspection.
//!
//! ## Error categories
//!
//! - **Lexical errors**: malformed escapes, numbers, or literals in text input
//! - **Structural errors**: token sequences that violate the grammar
//! - **Conversion errors**: wrong-kind accessors and overflowing widths
//! - **Binary errors**: unknown record tags, unencodable values
//! - **I/O errors**: file reading/writing failures, carrying the path
//!
//! ## Examples
//!
//! ```rust
//! use bijson::{parse_str, Error};
//!
//! let result = parse_str("{\"a\":tru}");
//! assert!(matches!(result, Err(Error::BadLiteral(_))));
//! ```

use crate::value::Kind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input ended inside a token or an open structure.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A backslash escape names no known escape character.
    #[error("invalid escape character '{0}'")]
    BadEscape(char),

    /// A `\u` sequence is malformed: non-hex digits, a lone surrogate, or a
    /// high surrogate without a matching low surrogate.
    #[error("invalid unicode escape: {0}")]
    BadUnicode(String),

    /// A number literal parses neither as an integer nor as a double.
    #[error("unreadable number literal '{0}'")]
    BadNumber(String),

    /// Expected `true`, `false`, or `null` and found something else.
    #[error("invalid literal '{0}'")]
    BadLiteral(String),

    /// The token sequence violates the grammar.
    #[error("structural error: {0}")]
    Structural(String),

    /// An accessor or conversion was applied to a value of the wrong kind.
    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: &'static str,
        found: Kind,
    },

    /// A numeric conversion overflows the requested width.
    #[error("numeric value out of range for {0}")]
    OutOfRange(&'static str),

    /// Binary input uses an unknown record tag or a non-generic binary
    /// subtype.
    #[error("unsupported binary type tag {0:#04x}")]
    UnsupportedBinType(u8),

    /// A value cannot be represented in the binary format.
    #[error("unsupported token in binary document: {0}")]
    UnsupportedToken(String),

    /// The binary encoder was invoked on a non-object root.
    #[error("binary documents must have an object root")]
    BadRootKind,

    /// An underlying file operation failed.
    #[error("{path}: {message}")]
    Io { path: String, message: String },

    /// Generic message, used by the serde bridge.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a structural error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bijson::Error;
    ///
    /// let err = Error::structural("comma at document root");
    /// assert!(err.to_string().contains("comma"));
    /// ```
    pub fn structural<T: fmt::Display>(msg: T) -> Self {
        Error::Structural(msg.to_string())
    }

    /// Creates a kind-mismatch error for an accessor applied to the wrong
    /// value kind.
    pub fn kind_mismatch(expected: &'static str, found: Kind) -> Self {
        Error::KindMismatch { expected, found }
    }

    /// Creates an unsupported-token error for values the binary format
    /// cannot carry.
    pub fn unsupported_token<T: fmt::Display>(msg: T) -> Self {
        Error::UnsupportedToken(msg.to_string())
    }

    /// Creates an I/O error carrying the offending path.
    pub fn io<P: AsRef<std::path::Path>>(path: P, err: &std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
