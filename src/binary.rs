//! Binary codec.
//!
//! The binary format is a length-prefixed record stream: a document is an
//! `int32` total length (little-endian, counting itself), element records,
//! and a terminating `0x00`. Each element is a one-byte type tag, a key
//! (NUL-terminated string inside objects, a two-byte index inside arrays),
//! and a typed payload. See [`crate::format`] for the full layout.
//!
//! Decoding does not build a tree directly: the document is rewritten into
//! compact text and handed to the lexer and builder, so both formats share
//! one structural validator. Encoding consumes the linearized token stream
//! of an object root.
//!
//! All positions and lengths are derived from bytes actually read or
//! written: the decoder computes each subdocument's end position from its
//! length field, and the encoder back-patches reserved length slots with
//! the real byte counts.

use crate::text::{escape_string, format_double};
use crate::token::Token;
use crate::{Error, Result};
use bytes::{Buf, BufMut, BytesMut};
use std::fmt::Write;

/// Record type tags.
mod tag {
    pub const DOUBLE: u8 = 0x01;
    pub const STRING: u8 = 0x02;
    pub const ARRAY: u8 = 0x04;
    pub const BINARY: u8 = 0x05;
    pub const BOOLEAN: u8 = 0x08;
    pub const DATETIME: u8 = 0x09;
    pub const NULL: u8 = 0x0A;
    pub const JS_CODE: u8 = 0x0D;
    pub const INT32: u8 = 0x10;
    pub const TIMESTAMP: u8 = 0x11;
    pub const INT64: u8 = 0x12;
}

/// Checked cursor over the input bytes.
struct Reader<'a> {
    buf: &'a [u8],
    initial_len: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Reader {
            buf: data,
            initial_len: data.len(),
        }
    }

    /// Bytes consumed so far, i.e. the cursor position in the document.
    fn consumed(&self) -> usize {
        self.initial_len - self.buf.len()
    }

    fn need(&self, count: usize) -> Result<()> {
        if self.buf.remaining() < count {
            Err(Error::UnexpectedEof)
        } else {
            Ok(())
        }
    }

    fn read_u8(&mut self) -> Result<u8> {
        self.need(1)?;
        Ok(self.buf.get_u8())
    }

    fn read_i32_le(&mut self) -> Result<i32> {
        self.need(4)?;
        Ok(self.buf.get_i32_le())
    }

    fn read_i64_le(&mut self) -> Result<i64> {
        self.need(8)?;
        Ok(self.buf.get_i64_le())
    }

    fn read_u64_le(&mut self) -> Result<u64> {
        self.need(8)?;
        Ok(self.buf.get_u64_le())
    }

    fn read_f64_le(&mut self) -> Result<f64> {
        self.need(8)?;
        Ok(self.buf.get_f64_le())
    }

    fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.need(count)?;
        let (head, rest) = self.buf.split_at(count);
        self.buf = rest;
        Ok(head)
    }

    /// Reads up to (and consuming) the next NUL byte.
    fn read_cstring(&mut self) -> Result<&'a [u8]> {
        let end = self
            .buf
            .iter()
            .position(|&b| b == 0)
            .ok_or(Error::UnexpectedEof)?;
        let (head, rest) = self.buf.split_at(end);
        self.buf = &rest[1..];
        Ok(head)
    }
}

/// Rewrites one binary document into compact text.
///
/// The root is always an object. Per open array the decoder tracks the
/// position where the array's terminator must sit, computed from the
/// declared length; overrunning it is fatal for the document.
pub(crate) fn binary_to_text(data: &[u8]) -> Result<String> {
    let mut reader = Reader::new(data);

    let declared = reader.read_i32_le()?;
    if declared < 5 {
        return Err(Error::structural(format!(
            "declared document length {declared} is too small"
        )));
    }
    let total = declared as usize;
    if total > data.len() {
        return Err(Error::UnexpectedEof);
    }

    let mut out = String::with_capacity(total * 2);
    out.push('{');

    // End position per open array; the element separator state sits on a
    // parallel stack with one extra slot for the root object.
    let mut array_ends: Vec<usize> = Vec::new();
    let mut first_element: Vec<bool> = vec![true];

    loop {
        if let Some(&end) = array_ends.last() {
            if reader.consumed() + 1 == end {
                if reader.read_u8()? != 0x00 {
                    return Err(Error::structural("missing array terminator"));
                }
                array_ends.pop();
                first_element.pop();
                out.push(']');
                continue;
            }
            if reader.consumed() + 1 > end {
                return Err(Error::structural(
                    "array contents overran the declared length",
                ));
            }
        } else {
            if reader.consumed() + 1 == total {
                if reader.read_u8()? != 0x00 {
                    return Err(Error::structural("missing document terminator"));
                }
                break;
            }
            if reader.consumed() + 1 > total {
                return Err(Error::structural(
                    "document contents overran the declared length",
                ));
            }
        }

        if let Some(first) = first_element.last_mut() {
            if *first {
                *first = false;
            } else {
                out.push(',');
            }
        }

        let type_tag = reader.read_u8()?;

        if array_ends.is_empty() {
            let raw = reader.read_cstring()?;
            let key = std::str::from_utf8(raw)
                .map_err(|_| Error::BadUnicode("invalid UTF-8 in object key".to_string()))?;
            out.push('"');
            out.push_str(&escape_string(key));
            out.push_str("\":");
        } else {
            // Two-byte index key; the value is positional
            reader.read_bytes(2)?;
        }

        match type_tag {
            tag::NULL => out.push_str("null"),
            tag::BOOLEAN => {
                let value = reader.read_u8()?;
                out.push_str(if value != 0 { "true" } else { "false" });
            }
            tag::INT32 => {
                let value = reader.read_i32_le()?;
                let _ = write!(out, "{value}");
            }
            tag::INT64 | tag::DATETIME => {
                let value = reader.read_i64_le()?;
                let _ = write!(out, "{value}");
            }
            tag::TIMESTAMP => {
                let value = reader.read_u64_le()?;
                let _ = write!(out, "{value}");
            }
            tag::DOUBLE => {
                let value = reader.read_f64_le()?;
                out.push_str(&format_double(value));
            }
            tag::STRING | tag::JS_CODE => decode_string(&mut reader, &mut out)?,
            tag::ARRAY => {
                let start = reader.consumed();
                let length = reader.read_i32_le()?;
                if length < 5 {
                    return Err(Error::structural(format!(
                        "declared array length {length} is too small"
                    )));
                }
                array_ends.push(start + length as usize);
                first_element.push(true);
                out.push('[');
            }
            tag::BINARY => decode_binary(&mut reader, &mut out)?,
            other => return Err(Error::UnsupportedBinType(other)),
        }
    }

    out.push('}');
    Ok(out)
}

/// String record: `int32` length, then that many UTF-8 bytes including a
/// trailing NUL. Content is escaped while being embedded into the text.
fn decode_string(reader: &mut Reader, out: &mut String) -> Result<()> {
    let length = reader.read_i32_le()?;
    if length <= 0 {
        return Err(Error::structural(format!(
            "declared string length {length} is too small"
        )));
    }
    let raw = reader.read_bytes(length as usize)?;
    if raw.last() != Some(&0) {
        return Err(Error::structural("string payload missing its terminator"));
    }
    let content = std::str::from_utf8(&raw[..raw.len() - 1])
        .map_err(|_| Error::BadUnicode("invalid UTF-8 in string payload".to_string()))?;
    out.push('"');
    out.push_str(&escape_string(content));
    out.push('"');
    Ok(())
}

/// Binary record: `int32` length, subtype byte, raw bytes. Only the generic
/// subtypes are accepted; the payload surfaces as an array of byte values.
fn decode_binary(reader: &mut Reader, out: &mut String) -> Result<()> {
    let length = reader.read_i32_le()?;
    if length < 0 {
        return Err(Error::structural(format!(
            "declared binary length {length} is negative"
        )));
    }
    let subtype = reader.read_u8()?;
    if subtype != 0x00 && subtype != 0x02 {
        return Err(Error::UnsupportedBinType(subtype));
    }
    let raw = reader.read_bytes(length as usize)?;
    out.push('[');
    for (index, byte) in raw.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        let _ = write!(out, "{byte}");
    }
    out.push(']');
    Ok(())
}

enum Ctx {
    Object,
    Array { len_pos: usize, index: u16 },
}

/// Encodes the linearized token stream of an object root.
pub(crate) fn tokens_to_binary(tokens: Vec<Token>) -> Result<Vec<u8>> {
    let tokens = narrow(tokens)?;
    let mut iter = tokens.into_iter();

    match iter.next() {
        Some(Token::BeginObject) => {}
        _ => return Err(Error::BadRootKind),
    }

    let mut out = BytesMut::new();
    out.put_i32_le(0); // root length slot, patched on close
    let mut stack: Vec<Ctx> = vec![Ctx::Object];
    let mut pending_key: Option<String> = None;

    for token in iter {
        if stack.is_empty() {
            return Err(Error::structural("tokens after document root"));
        }

        match token {
            Token::Key(key) => {
                pending_key = Some(key);
                continue;
            }
            Token::EndObject => {
                match stack.pop() {
                    Some(Ctx::Object) => {}
                    _ => return Err(Error::structural("unbalanced '}' in token stream")),
                }
                out.put_u8(0x00);
                if stack.is_empty() {
                    let total = document_length(out.len())?;
                    out[0..4].copy_from_slice(&total.to_le_bytes());
                }
                continue;
            }
            Token::EndArray => {
                match stack.pop() {
                    Some(Ctx::Array { len_pos, .. }) => {
                        out.put_u8(0x00);
                        let length = document_length(out.len() - len_pos)?;
                        out[len_pos..len_pos + 4].copy_from_slice(&length.to_le_bytes());
                    }
                    _ => return Err(Error::structural("unbalanced ']' in token stream")),
                }
                continue;
            }
            _ => {}
        }

        let type_tag = match &token {
            Token::Null => tag::NULL,
            Token::Bool(_) => tag::BOOLEAN,
            Token::Int(_) => tag::INT32,
            Token::Int64(_) => tag::INT64,
            Token::UInt64(_) => tag::TIMESTAMP,
            Token::Double(_) => tag::DOUBLE,
            Token::Str(_) => tag::STRING,
            Token::BeginArray => tag::ARRAY,
            Token::BeginObject => {
                return Err(Error::unsupported_token(
                    "the binary format has no record tag for nested objects",
                ))
            }
            other => {
                return Err(Error::unsupported_token(format!(
                    "{} in value position",
                    other.describe()
                )))
            }
        };
        out.put_u8(type_tag);

        match stack.last_mut() {
            Some(Ctx::Object) => {
                let key = pending_key
                    .take()
                    .ok_or_else(|| Error::structural("object value without a key"))?;
                if key.as_bytes().contains(&0) {
                    return Err(Error::unsupported_token("object key contains a NUL byte"));
                }
                out.put_slice(key.as_bytes());
                out.put_u8(0x00);
            }
            Some(Ctx::Array { index, .. }) => {
                put_array_key(&mut out, *index);
                *index = index.wrapping_add(1);
            }
            None => return Err(Error::structural("value after document root")),
        }

        match token {
            Token::Null => {}
            Token::Bool(value) => out.put_u8(u8::from(value)),
            Token::Int(value) => out.put_i32_le(value),
            Token::Int64(value) => out.put_i64_le(value),
            Token::UInt64(value) => out.put_u64_le(value),
            Token::Double(value) => out.put_f64_le(value),
            Token::Str(value) => {
                let length = document_length(value.len() + 1)?;
                out.put_i32_le(length);
                out.put_slice(value.as_bytes());
                out.put_u8(0x00);
            }
            Token::BeginArray => {
                stack.push(Ctx::Array {
                    len_pos: out.len(),
                    index: 0,
                });
                out.put_i32_le(0);
            }
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(Error::UnexpectedEof);
    }

    Ok(out.to_vec())
}

/// Array element keys are the element index rendered as lowercase hex,
/// truncated or NUL-padded to exactly two bytes.
fn put_array_key(out: &mut BytesMut, index: u16) {
    let hex = format!("{index:x}");
    let bytes = hex.as_bytes();
    out.put_u8(bytes[0]);
    out.put_u8(if bytes.len() > 1 { bytes[1] } else { 0x00 });
}

fn document_length(len: usize) -> Result<i32> {
    i32::try_from(len).map_err(|_| Error::OutOfRange("document length"))
}

/// Drops separator tokens and applies the narrowing rewrites before
/// encoding: unsigned 32-bit becomes signed 32-bit. Values that do not fit
/// the narrowed record cannot be encoded.
fn narrow(tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut narrowed = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Colon | Token::Comma => {}
            Token::UInt(value) => {
                let value = i32::try_from(value).map_err(|_| {
                    Error::unsupported_token(format!(
                        "uint32 value {value} does not fit an int32 record"
                    ))
                })?;
                narrowed.push(Token::Int(value));
            }
            other => narrowed.push(other),
        }
    }
    Ok(narrowed)
}
