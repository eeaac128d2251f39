//! # bijson
//!
//! A data-interchange engine that reads and writes two related formats — a
//! textual object notation (JSON) and a length-prefixed binary encoding —
//! through one polymorphic value tree.
//!
//! ## Key features
//!
//! - **One tree, two formats**: parse text or binary into [`Value`],
//!   manipulate it, serialize back to either format
//! - **Width-faithful numbers**: integers keep their parsed width (signed/
//!   unsigned, 32/64-bit); literals resolve to the narrowest width that fits
//! - **Full escape handling**: `\uXXXX` decoding with UTF-16 surrogate-pair
//!   combining, escaped output that round-trips every code point
//! - **Encoding detection**: UTF-8/16/32 input with or without a BOM
//! - **Serde friendly**: [`Value`] implements `Serialize`/`Deserialize`,
//!   and [`to_value`] builds trees from any `Serialize` type
//!
//! ## Quick start
//!
//! ```rust
//! use bijson::{parse_str, to_text, to_text_pretty, Value};
//!
//! let value = parse_str("{\"name\":\"Alice\",\"admin\":true}").unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("Alice"));
//!
//! // Compact output with lexicographic keys
//! assert_eq!(to_text(&value), "{\"admin\":true,\"name\":\"Alice\"}");
//!
//! // Pretty output
//! assert_eq!(
//!     to_text_pretty(&value),
//!     "{\n    \"admin\": true,\n    \"name\": \"Alice\"\n}"
//! );
//! ```
//!
//! ## Binary round-trip
//!
//! ```rust
//! use bijson::{bijson, parse, to_binary, Format};
//!
//! let value = bijson!({"hello": "world"});
//! let bytes = to_binary(&value).unwrap();
//! let back = parse(&bytes, Format::Binary).unwrap();
//! assert_eq!(back, value);
//! ```
//!
//! ## Building values
//!
//! ```rust
//! use bijson::{bijson, to_text};
//!
//! let value = bijson!({
//!     "id": 7,
//!     "tags": ["a", "b"],
//!     "nested": {"ok": true}
//! });
//! assert_eq!(
//!     to_text(&value),
//!     "{\"id\":7,\"nested\":{\"ok\":true},\"tags\":[\"a\",\"b\"]}"
//! );
//! ```

pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

mod binary;
mod builder;
mod encoding;
mod lexer;
mod linearize;
mod text;
mod token;

pub use error::{Error, Result};
pub use map::JsonMap;
pub use options::TextOptions;
pub use ser::ValueSerializer;
pub use value::{Kind, Value};

use serde::Serialize;
use std::fs;
use std::path::Path;

/// The two interchange formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The textual object notation.
    Text,
    /// The length-prefixed binary encoding.
    Binary,
}

/// Parses a byte buffer in the given format into a [`Value`].
///
/// Text input may be UTF-8, UTF-16, or UTF-32 (with or without a BOM);
/// everything is transcoded to UTF-8 before lexing. Binary input is
/// rewritten into text and run through the same lexer and builder, so both
/// formats share one structural validator.
///
/// # Examples
///
/// ```rust
/// use bijson::{parse, Format, Value};
///
/// let value = parse(b"[1,2]", Format::Text).unwrap();
/// assert_eq!(value.get_index(0), Some(&Value::UInt(1)));
/// ```
///
/// # Errors
///
/// Returns an error if the input is malformed at any stage: encoding,
/// lexing, or structure.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(bytes: &[u8], format: Format) -> Result<Value> {
    let text = match format {
        Format::Text => encoding::decode_text(bytes)?,
        Format::Binary => binary::binary_to_text(bytes)?,
    };
    parse_str(&text)
}

/// Parses a string of text into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use bijson::parse_str;
///
/// let value = parse_str("{\"a\":1}").unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the input is not well-formed; the root must be an
/// object or an array.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(text: &str) -> Result<Value> {
    builder::build(lexer::tokenize(text)?)
}

/// Reads and parses a file in the given format.
///
/// # Errors
///
/// Returns [`Error::Io`] carrying the path if the file cannot be read, or a
/// parse error if its contents are malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_file<P: AsRef<Path>>(path: P, format: Format) -> Result<Value> {
    let bytes = fs::read(&path).map_err(|e| Error::io(&path, &e))?;
    parse(&bytes, format)
}

/// Serializes a [`Value`] to compact text.
///
/// Object keys are written in lexicographic order, so equal trees produce
/// identical output.
///
/// # Examples
///
/// ```rust
/// use bijson::{bijson, to_text};
///
/// let value = bijson!({"b": 2, "a": 1});
/// assert_eq!(to_text(&value), "{\"a\":1,\"b\":2}");
/// ```
#[must_use]
pub fn to_text(value: &Value) -> String {
    to_text_with_options(value, TextOptions::new())
}

/// Serializes a [`Value`] to pretty-printed text.
///
/// # Examples
///
/// ```rust
/// use bijson::{bijson, to_text_pretty};
///
/// let value = bijson!([true]);
/// assert_eq!(to_text_pretty(&value), "[\n    true\n]");
/// ```
#[must_use]
pub fn to_text_pretty(value: &Value) -> String {
    to_text_with_options(value, TextOptions::pretty())
}

/// Serializes a [`Value`] to text with custom options.
#[must_use]
pub fn to_text_with_options(value: &Value, options: TextOptions) -> String {
    text::write_tokens(&linearize::linearize(value), &options)
}

/// Serializes a [`Value`] to the binary format.
///
/// # Errors
///
/// Fails with [`Error::BadRootKind`] unless the root is an object, and with
/// [`Error::UnsupportedToken`] for values the binary format cannot carry
/// (nested objects, unsigned 32-bit values above `i32::MAX`, keys
/// containing NUL).
///
/// # Examples
///
/// ```rust
/// use bijson::{bijson, to_binary};
///
/// let bytes = to_binary(&bijson!({})).unwrap();
/// assert_eq!(bytes, vec![0x05, 0x00, 0x00, 0x00, 0x00]);
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_binary(value: &Value) -> Result<Vec<u8>> {
    binary::tokens_to_binary(linearize::linearize(value))
}

/// Writes a [`Value`] to a file in the given format.
///
/// Text files are written as UTF-8 without a BOM; `pretty` selects
/// pretty-printing and is ignored for binary output.
///
/// # Errors
///
/// Returns [`Error::Io`] carrying the path if the file cannot be written,
/// or an encoding error from [`to_binary`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_file<P: AsRef<Path>>(
    path: P,
    value: &Value,
    format: Format,
    pretty: bool,
) -> Result<()> {
    let bytes = match format {
        Format::Text => {
            let options = if pretty {
                TextOptions::pretty()
            } else {
                TextOptions::new()
            };
            to_text_with_options(value, options).into_bytes()
        }
        Format::Binary => to_binary(value)?,
    };
    fs::write(&path, bytes).map_err(|e| Error::io(&path, &e))
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use bijson::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (e.g. a map with
/// non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bijson;

    #[test]
    fn test_parse_to_text_roundtrip() {
        let input = "{\"a\":1,\"b\":[true,null],\"c\":\"x\"}";
        let value = parse_str(input).unwrap();
        assert_eq!(to_text(&value), input);
    }

    #[test]
    fn test_parse_binary() {
        let value = bijson!({"answer": 42u32});
        let bytes = to_binary(&value).unwrap();
        let back = parse(&bytes, Format::Binary).unwrap();
        assert_eq!(back.get("answer"), Some(&Value::UInt(42)));
    }

    #[test]
    fn test_text_parse_accepts_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend(b"{\"a\":1}");
        let value = parse(&bytes, Format::Text).unwrap();
        assert_eq!(value.get("a"), Some(&Value::UInt(1)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = parse_file("/nonexistent/path.json", Format::Text).unwrap_err();
        match err {
            Error::Io { path, .. } => assert!(path.contains("nonexistent")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_display_is_compact_text() {
        let value = bijson!({"a": [1]});
        assert_eq!(value.to_string(), "{\"a\":[1]}");
    }
}
