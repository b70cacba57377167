//! Text → MUTF-8.

use alloc::vec::Vec;

use crate::lead::SURROGATE_LEAD;

/// Longest encoded form of a single code point: a surrogate pair written as
/// two three-byte halves.
pub const MAX_SEQUENCE_LEN: usize = 6;

/// Encode `text` as MUTF-8.
///
/// Encoding cannot fail: every `char` has exactly one MUTF-8 form.
///
/// # Examples
///
/// ```rust
/// assert_eq!(mutf8::encode("\u{0}"), [0xC0, 0x80]);
/// assert_eq!(
///     mutf8::encode("\u{1F608}"),
///     [0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x88]
/// );
/// ```
#[must_use]
pub fn encode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(text));
    encode_into(text, &mut out);
    out
}

/// Append the MUTF-8 encoding of `text` to `out`.
pub fn encode_into(text: &str, out: &mut Vec<u8>) {
    out.reserve(encoded_len(text));
    let mut buf = [0; MAX_SEQUENCE_LEN];
    for ch in text.chars() {
        out.extend_from_slice(encode_char(ch, &mut buf));
    }
}

/// Encode a sequence of code points as MUTF-8.
///
/// Space for [`MAX_SEQUENCE_LEN`] bytes per expected code point is reserved
/// up front, so supplementary-plane input never outgrows the initial buffer.
pub fn encode_chars<I>(chars: I) -> Vec<u8>
where
    I: IntoIterator<Item = char>,
{
    let chars = chars.into_iter();
    let (lower, _) = chars.size_hint();
    let mut out = Vec::with_capacity(lower.saturating_mul(MAX_SEQUENCE_LEN));
    let mut buf = [0; MAX_SEQUENCE_LEN];
    for ch in chars {
        out.extend_from_slice(encode_char(ch, &mut buf));
    }
    out
}

/// Encode a single code point into `buf`, returning the written prefix.
///
/// ```rust
/// let mut buf = [0; mutf8::MAX_SEQUENCE_LEN];
/// assert_eq!(mutf8::encode_char('\u{20A3}', &mut buf), [0xE2, 0x82, 0xA3]);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn encode_char(ch: char, buf: &mut [u8; MAX_SEQUENCE_LEN]) -> &[u8] {
    let cp = u32::from(ch);
    let len = match cp {
        0 => {
            buf[..2].copy_from_slice(&[0xC0, 0x80]);
            2
        }
        0x01..=0x7F => {
            buf[0] = cp as u8;
            1
        }
        0x80..=0x7FF => {
            buf[0] = (0xC0 | (cp >> 6)) as u8;
            buf[1] = (0x80 | (cp & 0x3F)) as u8;
            2
        }
        0x800..=0xFFFF => {
            buf[0] = (0xE0 | (cp >> 12)) as u8;
            buf[1] = (0x80 | ((cp >> 6) & 0x3F)) as u8;
            buf[2] = (0x80 | (cp & 0x3F)) as u8;
            3
        }
        _ => {
            let cp = cp - 0x10000;
            *buf = [
                SURROGATE_LEAD,
                (0xA0 | ((cp >> 16) & 0x0F)) as u8,
                (0x80 | ((cp >> 10) & 0x3F)) as u8,
                SURROGATE_LEAD,
                (0xB0 | ((cp >> 6) & 0x0F)) as u8,
                (0x80 | (cp & 0x3F)) as u8,
            ];
            6
        }
    };
    &buf[..len]
}

/// Number of bytes `ch` occupies once encoded: 1, 2, 3 or 6.
#[must_use]
pub const fn char_len(ch: char) -> usize {
    match ch as u32 {
        0 => 2,
        0x01..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => MAX_SEQUENCE_LEN,
    }
}

/// Exact size of `encode(text)`.
#[must_use]
pub fn encoded_len(text: &str) -> usize {
    text.chars().map(char_len).sum()
}
