//! Byte-stream decoding.
//!
//! Converts a raw byte buffer into a line-oriented [`Text`], validating
//! each line as UTF-8. Decoding is isolated here as its own pure step,
//! decoupled from the windowing logic, so malformed input is rejected
//! before it can corrupt trigram boundaries.

use glossa_types::{DecodeError, Text};
use memchr::memchr_iter;

/// Decodes a byte buffer into a [`Text`].
///
/// Lines are separated by LF. A final unterminated segment counts as a
/// line; the empty segment after a trailing LF does not. Trailing CR
/// bytes from CRLF input are preserved here, keeping the decode
/// lossless; stripping them is the profile builder's job.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidUtf8`] with the 1-based line number if
/// any line is not valid UTF-8. The whole text is rejected: substituting
/// or truncating characters would silently shift every window in the
/// affected line.
///
/// # Example
///
/// ```
/// use glossa_core::analyzer::decode::decode_text;
///
/// let text = decode_text(b"hello\nworld\n").unwrap();
/// assert_eq!(text.lines(), ["hello", "world"]);
/// ```
pub fn decode_text(bytes: &[u8]) -> Result<Text, DecodeError> {
    let mut text = Text::new();
    let mut start = 0usize;
    let mut line_no = 0usize;

    for end in memchr_iter(b'\n', bytes) {
        line_no += 1;
        text.push_line(decode_line(&bytes[start..end], line_no)?);
        start = end + 1;
    }

    if start < bytes.len() {
        text.push_line(decode_line(&bytes[start..], line_no + 1)?);
    }

    Ok(text)
}

/// Validates a single line as UTF-8.
#[inline]
fn decode_line(bytes: &[u8], line_no: usize) -> Result<String, DecodeError> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_owned()),
        Err(e) => Err(DecodeError::InvalidUtf8 {
            line: line_no,
            valid_up_to: e.valid_up_to(),
        }),
    }
}
