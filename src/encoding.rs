//! Input encoding classification and transcoding.
//!
//! Text input is classified by its first four bytes: a byte-order mark wins
//! when present, otherwise the zero-byte pattern of the first two
//! characters gives the encoding away (ASCII-heavy text in UTF-16/32 has
//! predictable zero positions). Anything unrecognized is treated as UTF-8.
//! The BOM is skipped; UTF-16/UTF-32 input is transcoded to UTF-8 before it
//! reaches the lexer. Output is always UTF-8 without a BOM.

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

/// Classifies the input and returns the encoding together with the number
/// of BOM bytes to skip.
pub(crate) fn detect(bytes: &[u8]) -> (Encoding, usize) {
    if bytes.len() >= 4 {
        if bytes[..4] == [0xFF, 0xFE, 0x00, 0x00] {
            return (Encoding::Utf32Le, 4);
        }
        if bytes[..4] == [0x00, 0x00, 0xFE, 0xFF] {
            return (Encoding::Utf32Be, 4);
        }
    }
    if bytes.len() >= 2 {
        if bytes[..2] == [0xFF, 0xFE] {
            return (Encoding::Utf16Le, 2);
        }
        if bytes[..2] == [0xFE, 0xFF] {
            return (Encoding::Utf16Be, 2);
        }
    }
    if bytes.len() >= 3 && bytes[..3] == [0xEF, 0xBB, 0xBF] {
        return (Encoding::Utf8, 3);
    }

    // No BOM: infer wide encodings from the zero-byte pattern
    if bytes.len() >= 4 {
        let zeroes = [
            bytes[0] == 0x00,
            bytes[1] == 0x00,
            bytes[2] == 0x00,
            bytes[3] == 0x00,
        ];
        match zeroes {
            [false, true, true, true] => return (Encoding::Utf32Le, 0),
            [true, true, true, false] => return (Encoding::Utf32Be, 0),
            [false, true, false, true] => return (Encoding::Utf16Le, 0),
            [true, false, true, false] => return (Encoding::Utf16Be, 0),
            _ => {}
        }
    }

    (Encoding::Utf8, 0)
}

/// Decodes raw input bytes into UTF-8 text, applying BOM detection and
/// transcoding.
pub(crate) fn decode_text(bytes: &[u8]) -> Result<String> {
    let (encoding, skip) = detect(bytes);
    let body = &bytes[skip..];
    match encoding {
        Encoding::Utf8 => String::from_utf8(body.to_vec())
            .map_err(|_| Error::BadUnicode("input is not valid UTF-8".to_string())),
        Encoding::Utf16Le => decode_utf16(body, u16::from_le_bytes),
        Encoding::Utf16Be => decode_utf16(body, u16::from_be_bytes),
        Encoding::Utf32Le => decode_utf32(body, u32::from_le_bytes),
        Encoding::Utf32Be => decode_utf32(body, u32::from_be_bytes),
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::BadUnicode(
            "UTF-16 input has an odd number of bytes".to_string(),
        ));
    }
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|err| Error::BadUnicode(format!("invalid UTF-16 input: {err}")))
}

fn decode_utf32(bytes: &[u8], unit: fn([u8; 4]) -> u32) -> Result<String> {
    if bytes.len() % 4 != 0 {
        return Err(Error::BadUnicode(
            "UTF-32 input length is not a multiple of four".to_string(),
        ));
    }
    bytes
        .chunks_exact(4)
        .map(|quad| {
            let code = unit([quad[0], quad[1], quad[2], quad[3]]);
            char::from_u32(code)
                .ok_or_else(|| Error::BadUnicode(format!("invalid code point {code:#X}")))
        })
        .collect()
}
