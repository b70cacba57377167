use alloc::string::String;

use rstest::rstest;

use crate::{DecodeError, DecodeErrorKind, DecodeOptions, decode, decode_with, encode};

const STRICT: DecodeOptions = DecodeOptions {
    strict_surrogate_pairs: true,
};

#[rstest]
#[case::embedded_null(b"\x31\xC0\x80\x32", "1\u{0}2")]
#[case::surrogate_pair(b"\xED\xA0\xBD\xED\xB8\x88", "\u{1F608}")]
#[case::two_byte(b"\xC2\xB6", "\u{B6}")]
#[case::three_byte(b"\xE2\x82\xA3", "\u{20A3}")]
#[case::three_byte_led_by_ed(b"\xED\x9F\xBF", "\u{D7FF}")]
#[case::empty(b"", "")]
fn canonical_pairs(#[case] bytes: &[u8], #[case] text: &str) {
    assert_eq!(decode(bytes).as_deref(), Ok(text));
    assert_eq!(decode_with(bytes, STRICT).as_deref(), Ok(text));
    assert_eq!(encode(text), bytes);
}

#[rstest]
#[case::null(b"\x00", 0, DecodeErrorKind::NullByte)]
#[case::null_after_text(b"\xC2\xB6\x00", 2, DecodeErrorKind::NullByte)]
#[case::two_byte(b"\xC2", 0, DecodeErrorKind::IncompleteTwoByte)]
#[case::two_byte_at_end(b"ab\xC2", 2, DecodeErrorKind::IncompleteTwoByte)]
#[case::three_byte(b"\xE2", 0, DecodeErrorKind::IncompleteThreeByte)]
#[case::three_byte_one_short(b"\xE2\x82", 0, DecodeErrorKind::IncompleteThreeByte)]
#[case::three_byte_led_by_ed(b"\xED\x80", 0, DecodeErrorKind::IncompleteThreeByte)]
#[case::six_byte(b"\xED", 0, DecodeErrorKind::IncompleteSixByte)]
#[case::six_byte_first_half(b"\xED\xA0\xBD", 0, DecodeErrorKind::IncompleteSixByte)]
#[case::six_byte_one_short(b"x\xED\xA0\xBD\xED\xB8", 1, DecodeErrorKind::IncompleteSixByte)]
fn rejects_with_lead_offset(
    #[case] bytes: &[u8],
    #[case] offset: usize,
    #[case] kind: DecodeErrorKind,
) {
    let want = DecodeError::new(kind, offset);
    assert_eq!(decode(bytes), Err(want));
    assert_eq!(decode_with(bytes, STRICT), Err(want));
}

#[rstest]
#[case::overlong_ascii(b"\xC1\x81", "A")]
#[case::unchecked_continuation(b"\xC2\x41", "\u{81}")]
#[case::stray_continuation(b"\x80", "\u{80}")]
#[case::stray_high_byte(b"a\xFFb", "a\u{FF}b")]
#[case::four_byte_lead(b"\xF0\x9F\x98\x88", "\u{F0}\u{9F}\u{98}\u{88}")]
fn lenient_inputs_decode(#[case] bytes: &[u8], #[case] text: &str) {
    assert_eq!(decode(bytes).as_deref(), Ok(text));
    assert_ne!(encode(text), bytes);
}

/// The second half's lead byte is skipped, not checked. Strict mode turns
/// that leniency into an error.
#[rstest]
#[case::second_lead_not_ed(b"\xED\xA0\xBD\x41\xB8\x88")]
#[case::second_half_high(b"\xED\xA0\xBD\xED\xA8\x88")]
#[case::first_half_low(b"\xED\xB0\xBD\xED\xB8\x88")]
#[case::bad_continuation(b"\xED\xA0\x3D\xED\xB8\x88")]
fn malformed_pairs_decode_leniently(#[case] bytes: &[u8]) {
    let text: String = decode(bytes).unwrap();
    assert_eq!(text.chars().count(), 1);
    assert!(text.chars().all(|ch| u32::from(ch) >= 0x10000));

    assert_eq!(
        decode_with(bytes, STRICT),
        Err(DecodeError::new(DecodeErrorKind::InvalidSurrogatePair, 0))
    );
}

#[test]
fn lenient_pair_keeps_payload_bits() {
    // Same payload as U+1F608, with an 'A' where the second 0xED belongs.
    assert_eq!(decode(b"\xED\xA0\xBD\x41\xB8\x88").unwrap(), "\u{1F608}");
}

#[test]
fn incomplete_error_reports_expected_length() {
    let err = decode(b"\xED\xA0").unwrap_err();
    assert_eq!(err.kind().expected_len(), Some(6));
    assert_eq!(DecodeErrorKind::NullByte.expected_len(), None);
}
