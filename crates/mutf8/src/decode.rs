//! MUTF-8 → text.

use alloc::string::String;
use core::iter::FusedIterator;

use crate::{
    DecodeError, DecodeErrorKind, DecodeOptions,
    lead::{Lead, SURROGATE_LEAD},
};

/// Decode MUTF-8 bytes into a `String` with the default (lenient) options.
///
/// # Errors
///
/// Returns a [`DecodeError`] for the first sequence that cannot be decoded:
/// a literal `0x00` byte, or a multi-byte sequence cut short by the end of
/// the input.
///
/// # Examples
///
/// ```rust
/// assert_eq!(mutf8::decode(b"1\xC0\x802").unwrap(), "1\u{0}2");
/// assert_eq!(
///     mutf8::decode(&[0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x88]).unwrap(),
///     "\u{1F608}"
/// );
/// ```
pub fn decode(bytes: &[u8]) -> Result<String, DecodeError> {
    decode_with(bytes, DecodeOptions::default())
}

/// Decode MUTF-8 bytes into a `String`.
///
/// # Errors
///
/// See [`decode`]. With [`DecodeOptions::strict_surrogate_pairs`] set,
/// malformed six-byte sequences are rejected as well.
pub fn decode_with(bytes: &[u8], options: DecodeOptions) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(bytes.len());
    for ch in Decoder::with_options(bytes, options) {
        out.push(ch?);
    }
    Ok(out)
}

/// Iterator over the code points of a MUTF-8 byte slice.
///
/// Yields one item per encoded sequence. After an error is yielded the
/// iterator is exhausted.
///
/// ```rust
/// let mut chars = mutf8::Decoder::new(b"a\xC2\xB6");
/// assert_eq!(chars.next(), Some(Ok('a')));
/// assert_eq!(chars.offset(), 1);
/// assert_eq!(chars.next(), Some(Ok('\u{B6}')));
/// assert_eq!(chars.offset(), 3);
/// assert_eq!(chars.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    offset: usize,
    options: DecodeOptions,
    failed: bool,
}

impl<'a> Decoder<'a> {
    /// Decode `bytes` with the default options.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_options(bytes, DecodeOptions::default())
    }

    /// Decode `bytes` with `options`.
    #[must_use]
    pub fn with_options(bytes: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            bytes,
            offset: 0,
            options,
            failed: false,
        }
    }

    /// Byte offset of the next sequence to be decoded.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The bytes not yet decoded.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<char, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.bytes.len() {
            return None;
        }
        match decode_sequence(self.bytes, self.offset, self.options) {
            Ok((ch, width)) => {
                self.offset += width;
                Some(Ok(ch))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let rest = self.bytes.len() - self.offset;
        (usize::from(rest > 0), Some(rest))
    }
}

impl FusedIterator for Decoder<'_> {}

/// Decode the sequence whose lead byte sits at `ix`, returning the code point
/// and the number of bytes it occupies.
///
/// The returned width is always at least one, which is what guarantees that
/// every caller's scan makes progress.
pub(crate) fn decode_sequence(
    bytes: &[u8],
    ix: usize,
    options: DecodeOptions,
) -> Result<(char, usize), DecodeError> {
    let lead = bytes[ix];
    let class = Lead::classify(lead, bytes.get(ix + 1).copied());
    let cp = match class {
        Lead::Null => return Err(DecodeError::new(DecodeErrorKind::NullByte, ix)),
        Lead::Ascii => u32::from(lead & 0x7F),
        Lead::Stray => u32::from(lead),
        Lead::Two => {
            let [_, c] = take::<2>(bytes, ix, DecodeErrorKind::IncompleteTwoByte)?;
            (u32::from(lead & 0x1F) << 6) | u32::from(c & 0x3F)
        }
        Lead::Three => {
            let [_, c1, c2] = take::<3>(bytes, ix, DecodeErrorKind::IncompleteThreeByte)?;
            (u32::from(lead & 0x0F) << 12) | (u32::from(c1 & 0x3F) << 6) | u32::from(c2 & 0x3F)
        }
        Lead::SurrogatePair => {
            let seq = take::<6>(bytes, ix, DecodeErrorKind::IncompleteSixByte)?;
            if options.strict_surrogate_pairs && !is_surrogate_pair(seq) {
                return Err(DecodeError::new(
                    DecodeErrorKind::InvalidSurrogatePair,
                    ix,
                ));
            }
            let [_, v, w, _, y, z] = seq;
            0x10000
                + (u32::from(v & 0x0F) << 16)
                + (u32::from(w & 0x3F) << 10)
                + (u32::from(y & 0x0F) << 6)
                + u32::from(z & 0x3F)
        }
    };
    Ok((scalar(cp), class.width()))
}

/// Copy the `N` bytes starting at `ix`, or fail with `kind` at `ix` when the
/// input ends first.
fn take<const N: usize>(
    bytes: &[u8],
    ix: usize,
    kind: DecodeErrorKind,
) -> Result<[u8; N], DecodeError> {
    bytes
        .get(ix..)
        .and_then(|rest| rest.first_chunk::<N>())
        .copied()
        .ok_or(DecodeError::new(kind, ix))
}

/// `ED 1010xxxx 10xxxxxx ED 1011xxxx 10xxxxxx`
fn is_surrogate_pair([lead, v, w, x, y, z]: [u8; 6]) -> bool {
    lead == SURROGATE_LEAD
        && v & 0xF0 == 0xA0
        && w & 0xC0 == 0x80
        && x == SURROGATE_LEAD
        && y & 0xF0 == 0xB0
        && z & 0xC0 == 0x80
}

fn scalar(cp: u32) -> char {
    // Two-byte payloads stop at 0x7FF, three-byte ones never reach the
    // surrogate block (see `Lead::classify`) and pairs stop at 0x10FFFF.
    char::from_u32(cp).unwrap_or_else(|| unreachable!("decoded {cp:#X} is not a scalar value"))
}
