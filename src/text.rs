//! Text writer: token stream → textual output, compact or pretty.
//!
//! Compact mode concatenates tokens with no whitespace. Pretty mode places
//! each element on its own line, indents by a configurable number of spaces
//! per nesting level, ends lines at commas, and puts closing brackets on
//! their own line at the enclosing depth.

use crate::options::TextOptions;
use crate::token::Token;
use std::fmt::Write;

pub(crate) fn write_tokens(tokens: &[Token], options: &TextOptions) -> String {
    if options.pretty {
        write_pretty(tokens, options.indent)
    } else {
        write_compact(tokens)
    }
}

fn write_compact(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::BeginObject => out.push('{'),
            Token::EndObject => out.push('}'),
            Token::BeginArray => out.push('['),
            Token::EndArray => out.push(']'),
            Token::Colon => out.push(':'),
            Token::Comma => out.push(','),
            other => write_scalar(&mut out, other),
        }
    }
    out
}

fn write_pretty(tokens: &[Token], indent: usize) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    let mut prev: Option<&Token> = None;

    for token in tokens {
        match token {
            Token::BeginObject | Token::BeginArray => {
                if matches!(prev, Some(Token::BeginObject | Token::BeginArray)) {
                    break_line(&mut out, depth, indent);
                }
                out.push(if matches!(token, Token::BeginObject) {
                    '{'
                } else {
                    '['
                });
                depth += 1;
            }
            Token::EndObject | Token::EndArray => {
                depth = depth.saturating_sub(1);
                let empty = matches!(
                    (prev, token),
                    (Some(Token::BeginObject), Token::EndObject)
                        | (Some(Token::BeginArray), Token::EndArray)
                );
                if !empty {
                    break_line(&mut out, depth, indent);
                }
                out.push(if matches!(token, Token::EndObject) {
                    '}'
                } else {
                    ']'
                });
            }
            Token::Colon => out.push_str(": "),
            Token::Comma => {
                out.push(',');
                break_line(&mut out, depth, indent);
            }
            other => {
                if matches!(prev, Some(Token::BeginObject | Token::BeginArray)) {
                    break_line(&mut out, depth, indent);
                }
                write_scalar(&mut out, other);
            }
        }
        prev = Some(token);
    }

    out
}

fn break_line(out: &mut String, depth: usize, indent: usize) {
    out.push('\n');
    for _ in 0..depth * indent {
        out.push(' ');
    }
}

fn write_scalar(out: &mut String, token: &Token) {
    match token {
        Token::Key(s) | Token::Str(s) => {
            out.push('"');
            out.push_str(&escape_string(s));
            out.push('"');
        }
        Token::Null => out.push_str("null"),
        Token::Bool(true) => out.push_str("true"),
        Token::Bool(false) => out.push_str("false"),
        Token::Int(v) => {
            let _ = write!(out, "{v}");
        }
        Token::UInt(v) => {
            let _ = write!(out, "{v}");
        }
        Token::Int64(v) => {
            let _ = write!(out, "{v}");
        }
        Token::UInt64(v) => {
            let _ = write!(out, "{v}");
        }
        Token::Double(v) => {
            let _ = write!(out, "{}", format_double(*v));
        }
        // Structural tokens are handled by the callers
        _ => {}
    }
}

/// Doubles are written with fixed 15-digit precision.
pub(crate) fn format_double(value: f64) -> String {
    format!("{value:.15}")
}

/// Applies outgoing escaping to string content.
///
/// Named escapes for the quote, backslash, and the control characters that
/// have short forms; printable 7-bit characters pass through; everything
/// else becomes `\uXXXX`, with code points above the BMP split into a
/// UTF-16 surrogate pair.
pub(crate) fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            ' '..='\u{7e}' => out.push(ch),
            other => {
                let code = other as u32;
                if code >= 0x10000 {
                    let offset = code - 0x10000;
                    let high = 0xD800 + (offset >> 10);
                    let low = 0xDC00 + (offset & 0x3FF);
                    let _ = write!(out, "\\u{high:04X}\\u{low:04X}");
                } else {
                    let _ = write!(out, "\\u{code:04X}");
                }
            }
        }
    }
    out
}
