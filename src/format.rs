//! Wire format reference.
//!
//! This module documents the two formats the crate reads and writes.
//!
//! # Text format
//!
//! The text format is an object-notation with two container kinds and six
//! scalar kinds:
//!
//! ```text
//! {"name": "Alice", "age": 30, "tags": ["admin", "ops"], "score": 1.5}
//! ```
//!
//! ## Structure
//!
//! - A document is one object (`{...}`) or one array (`[...]`).
//! - Objects hold `"key": value` pairs separated by commas. Keys are
//!   unique; output orders them lexicographically.
//! - Arrays hold comma-separated values.
//! - Values are objects, arrays, strings, numbers, `true`, `false`, `null`.
//!
//! ## Whitespace
//!
//! Between tokens the following bytes are skipped: space, tab, carriage
//! return, line feed, vertical tab, form feed, backspace, and (a quirk of
//! the format) the forward slash and backslash. Inside string literals
//! nothing is skipped.
//!
//! ## Numbers
//!
//! A literal containing `.`, `e`, or `E` is a double; doubles are written
//! back with fixed 15-digit precision. Any other literal is an integer and
//! is resolved into the narrowest fitting width: non-negative literals
//! prefer unsigned 32-bit, then unsigned 64-bit; negative literals prefer
//! signed 32-bit, then signed 64-bit. Literals outside the 64-bit range are
//! rejected.
//!
//! ## Strings
//!
//! Strings are double-quoted. Escapes:
//!
//! ```text
//! \"  \\  \/          literal character
//! \b \f \n \r \t \v   control codes
//! \uXXXX              code point from four hex digits
//! ```
//!
//! A high surrogate (`D800`–`DBFF`) immediately followed by a low surrogate
//! (`DC00`–`DFFF`) combines into one supplementary-plane code point.
//! Unpaired surrogates are rejected. On output, printable 7-bit characters
//! are written literally, the named controls use their short escapes, and
//! every other code point becomes `\uXXXX` (a surrogate pair above the
//! BMP).
//!
//! # Binary format
//!
//! A binary document encodes one object:
//!
//! ```text
//! int32 totalLength      little-endian, counts itself
//! element*
//! 0x00                   document terminator
//! ```
//!
//! Each element is a type tag, a key, and a payload. Keys inside the root
//! object are NUL-terminated UTF-8 strings; keys inside arrays are exactly
//! two bytes holding the element index in lowercase hex (NUL-padded) and
//! are ignored by the reader, which tracks positions itself.
//!
//! | Tag  | Payload                                                   |
//! |------|-----------------------------------------------------------|
//! | 0x01 | double, little-endian binary64                            |
//! | 0x02 | int32 length, then length UTF-8 bytes incl. trailing NUL  |
//! | 0x04 | nested array document (same framing as the root)          |
//! | 0x05 | int32 length, uint8 subtype (0x00/0x02), then raw bytes   |
//! | 0x08 | one byte, 0x00 = false, otherwise true                    |
//! | 0x09 | int64 UTC datetime, read as an integer                    |
//! | 0x0A | null, no payload                                          |
//! | 0x0D | JS code, same layout as 0x02                              |
//! | 0x10 | int32, little-endian                                      |
//! | 0x11 | uint64 timestamp, little-endian                           |
//! | 0x12 | int64, little-endian                                      |
//!
//! Nested arrays repeat the framing: their int32 length counts the length
//! field, the element records, and the terminator.
//!
//! ## Restrictions
//!
//! - The root must be an object; there is no tag for nested objects.
//! - On encode, unsigned 32-bit values are rewritten to the int32 record
//!   (0x10); values above `i32::MAX` cannot be encoded. 64-bit values use
//!   0x12 (signed) and 0x11 (unsigned).
//! - Binary records (0x05) decode to arrays of byte values; nothing encodes
//!   back to them.
//!
//! # Input encodings
//!
//! Text input may be UTF-8, UTF-16, or UTF-32 in either byte order. The
//! first four bytes decide:
//!
//! | Pattern                 | Encoding  |
//! |-------------------------|-----------|
//! | `FF FE 00 00`           | UTF-32 LE |
//! | `00 00 FE FF`           | UTF-32 BE |
//! | `FF FE`                 | UTF-16 LE |
//! | `FE FF`                 | UTF-16 BE |
//! | `EF BB BF`              | UTF-8     |
//! | `xx 00 xx 00`, no BOM   | UTF-16 LE |
//! | `00 xx 00 xx`, no BOM   | UTF-16 BE |
//! | `xx 00 00 00`, no BOM   | UTF-32 LE |
//! | `00 00 00 xx`, no BOM   | UTF-32 BE |
//! | anything else           | UTF-8     |
//!
//! The BOM is skipped on input and never written on output.

// This module contains only documentation; no implementation code
