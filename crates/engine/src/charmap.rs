//! Byte-to-text decoding for the supported input encodings.

use crate::error::{EngineError, Result};
use crate::options::InputEncoding;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Code points for bytes `0x80..=0x9F` in windows-1252.
///
/// Unassigned positions (0x81, 0x8D, 0x8F, 0x90, 0x9D) keep the C1 control of
/// the same value, as browsers do.
const WINDOWS_1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

#[must_use]
pub fn windows_1252_char(byte: u8) -> char {
    match byte {
        0x80..=0x9F => WINDOWS_1252_HIGH[usize::from(byte - 0x80)],
        _ => char::from(byte),
    }
}

#[must_use]
pub fn decode_windows_1252(bytes: &[u8]) -> String {
    bytes.iter().copied().map(windows_1252_char).collect()
}

/// Decode `bytes` read from `path` according to `encoding`.
///
/// # Errors
///
/// Returns [`EngineError::Decode`] when strict UTF-8 decoding fails.
pub fn decode(bytes: Vec<u8>, encoding: InputEncoding, path: &Path) -> Result<String> {
    match encoding {
        InputEncoding::Windows1252 => Ok(decode_windows_1252(&bytes)),
        InputEncoding::Utf8 => {
            let (bytes, skipped) = strip_bom(bytes);
            String::from_utf8(bytes).map_err(|e| EngineError::Decode {
                path: path.to_path_buf(),
                offset: skipped + e.utf8_error().valid_up_to(),
            })
        }
        InputEncoding::Auto => match String::from_utf8(strip_bom(bytes).0) {
            Ok(text) => Ok(text),
            Err(e) => {
                log::debug!("{} is not UTF-8, decoding as windows-1252", path.display());
                Ok(decode_windows_1252(e.as_bytes()))
            }
        },
    }
}

/// Returns the bytes without a leading BOM and the number of bytes removed.
fn strip_bom(mut bytes: Vec<u8>) -> (Vec<u8>, usize) {
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
        (bytes, UTF8_BOM.len())
    } else {
        (bytes, 0)
    }
}
