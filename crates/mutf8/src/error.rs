use core::fmt;

use thiserror::Error;

/// A failure to decode MUTF-8 input.
///
/// Carries the byte offset of the lead byte of the sequence that was rejected
/// and the reason it was rejected. Decoding stops at the first failure; no
/// partial output is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} at byte offset {offset}")]
pub struct DecodeError {
    pub(crate) kind: DecodeErrorKind,
    pub(crate) offset: usize,
}

impl DecodeError {
    pub(crate) const fn new(kind: DecodeErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Byte offset of the lead byte that caused the rejection.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Why the sequence was rejected.
    #[must_use]
    pub const fn kind(&self) -> DecodeErrorKind {
        self.kind
    }
}

/// The reason a [`DecodeError`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeErrorKind {
    /// A literal `0x00` byte. MUTF-8 spells U+0000 as `C0 80`.
    NullByte,
    /// A two-byte lead with no room for its continuation byte.
    IncompleteTwoByte,
    /// A three-byte lead with fewer than two bytes after it.
    IncompleteThreeByte,
    /// A surrogate-pair lead with fewer than five bytes after it.
    IncompleteSixByte,
    /// A six-byte sequence whose halves do not form a surrogate pair. Only
    /// raised when [`DecodeOptions::strict_surrogate_pairs`] is set.
    ///
    /// [`DecodeOptions::strict_surrogate_pairs`]: crate::DecodeOptions::strict_surrogate_pairs
    InvalidSurrogatePair,
}

impl DecodeErrorKind {
    /// Human-readable reason, as reported by `Display`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NullByte => "NULL bytes not allowed",
            Self::IncompleteTwoByte => "incomplete two-byte codepoint",
            Self::IncompleteThreeByte => "incomplete three-byte codepoint",
            Self::IncompleteSixByte => "incomplete six-byte codepoint",
            Self::InvalidSurrogatePair => "malformed six-byte surrogate pair",
        }
    }

    /// Number of bytes the rejected sequence class expects, including its
    /// lead byte. `None` for a NULL byte, which starts no sequence.
    #[must_use]
    pub const fn expected_len(self) -> Option<usize> {
        match self {
            Self::NullByte => None,
            Self::IncompleteTwoByte => Some(2),
            Self::IncompleteThreeByte => Some(3),
            Self::IncompleteSixByte | Self::InvalidSurrogatePair => Some(6),
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
