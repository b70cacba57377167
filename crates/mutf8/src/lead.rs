//! Lead byte classification.
//!
//! The classes overlap as bit patterns (`0xED` is also a `1110xxxx` lead), so
//! they are tried in a fixed priority order: NULL, one byte, two bytes, the
//! surrogate pair, three bytes. Bytes no class claims are passed through as
//! the code point of equal value.

/// Lead byte of a surrogate-pair half.
pub(crate) const SURROGATE_LEAD: u8 = 0xED;

/// Sequence class selected by a lead byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lead {
    /// `0x00`, never legal on its own.
    Null,
    /// `0xxxxxxx`
    Ascii,
    /// `110xxxxx`
    Two,
    /// `0xED` followed by a high-surrogate payload, two three-byte halves.
    SurrogatePair,
    /// `1110xxxx`, including `0xED` when it encodes U+D000..U+D7FF.
    Three,
    /// `10xxxxxx` or `11110xxx`..`0xFF`.
    Stray,
}

impl Lead {
    /// Classify `lead`, peeking at the byte after it to tell a surrogate pair
    /// apart from a three-byte sequence that merely starts with `0xED`.
    pub(crate) fn classify(lead: u8, next: Option<u8>) -> Self {
        match lead {
            0x00 => Self::Null,
            _ if lead >> 7 == 0 => Self::Ascii,
            _ if lead >> 5 == 0b110 => Self::Two,
            SURROGATE_LEAD if opens_surrogate_pair(next) => Self::SurrogatePair,
            _ if lead >> 4 == 0b1110 => Self::Three,
            _ => Self::Stray,
        }
    }

    /// Number of bytes the sequence occupies, lead included.
    pub(crate) const fn width(self) -> usize {
        match self {
            Self::Null | Self::Ascii | Self::Stray => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::SurrogatePair => 6,
        }
    }
}

/// A three-byte sequence led by `0xED` lands in D800..DFFF exactly when its
/// first continuation has bit 5 set. Those values only exist as surrogate
/// halves, so such a lead starts a six-byte pair. A trailing `0xED` with
/// nothing after it is reported as an incomplete pair.
fn opens_surrogate_pair(next: Option<u8>) -> bool {
    next.is_none_or(|b| b & 0x20 != 0)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0x00, None, Lead::Null)]
    #[case(0x01, None, Lead::Ascii)]
    #[case(0x7F, Some(0x00), Lead::Ascii)]
    #[case(0xC0, Some(0x80), Lead::Two)]
    #[case(0xDF, None, Lead::Two)]
    #[case(0xE0, Some(0xA0), Lead::Three)]
    #[case(0xEC, Some(0xBF), Lead::Three)]
    #[case(0xEF, None, Lead::Three)]
    #[case(0xED, None, Lead::SurrogatePair)]
    #[case(0xED, Some(0xA0), Lead::SurrogatePair)]
    #[case(0xED, Some(0xBF), Lead::SurrogatePair)]
    #[case(0xED, Some(0x80), Lead::Three)]
    #[case(0xED, Some(0x9F), Lead::Three)]
    #[case(0x80, None, Lead::Stray)]
    #[case(0xBF, None, Lead::Stray)]
    #[case(0xF0, Some(0x9F), Lead::Stray)]
    #[case(0xFF, None, Lead::Stray)]
    fn classifies_lead_bytes(#[case] lead: u8, #[case] next: Option<u8>, #[case] want: Lead) {
        assert_eq!(Lead::classify(lead, next), want);
    }

    #[test]
    fn every_byte_has_a_class_of_nonzero_width() {
        for lead in 0..=u8::MAX {
            for next in [None, Some(0x80), Some(0xA0)] {
                assert!(Lead::classify(lead, next).width() >= 1);
            }
        }
    }

    #[test]
    fn surrogate_pair_wins_over_three_byte() {
        // 0xED matches 1110xxxx too; the pair must take priority.
        assert_eq!(SURROGATE_LEAD >> 4, 0b1110);
        assert_eq!(
            Lead::classify(SURROGATE_LEAD, Some(0xA0)),
            Lead::SurrogatePair
        );
    }
}
