//! Configuration options for text output.
//!
//! ## Examples
//!
//! ```rust
//! use bijson::{bijson, to_text_with_options, TextOptions};
//!
//! let value = bijson!({"a": 1});
//!
//! // Compact output
//! let compact = to_text_with_options(&value, TextOptions::new());
//! assert_eq!(compact, "{\"a\":1}");
//!
//! // Pretty output with a custom indent width
//! let options = TextOptions::pretty().with_indent(2);
//! let pretty = to_text_with_options(&value, options);
//! assert_eq!(pretty, "{\n  \"a\": 1\n}");
//! ```

/// Configuration options for the text writer.
///
/// Default output is compact (no whitespace). Pretty output places each
/// element on its own line, indented four spaces per nesting level.
#[derive(Clone, Debug)]
pub struct TextOptions {
    pub pretty: bool,
    pub indent: usize,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            pretty: false,
            indent: 4,
        }
    }
}

impl TextOptions {
    /// Creates default options (compact output).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bijson::TextOptions;
    ///
    /// let options = TextOptions::new();
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bijson::TextOptions;
    ///
    /// let options = TextOptions::pretty();
    /// assert!(options.pretty);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        TextOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation width in spaces per nesting level.
    ///
    /// Only affects pretty output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
