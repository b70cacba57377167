/// Configuration options for the MUTF-8 decoder.
///
/// The defaults reproduce the lenient behavior class-file readers have
/// historically relied on: only the structure needed to find sequence
/// boundaries is checked, and payload bits are extracted without further
/// validation.
///
/// # Examples
///
/// ```rust
/// use mutf8::{DecodeErrorKind, DecodeOptions, decode_with};
///
/// // The second half does not start with 0xED.
/// let bytes = [0xED, 0xA0, 0xBD, 0x41, 0xB8, 0x88];
///
/// assert!(decode_with(&bytes, DecodeOptions::default()).is_ok());
///
/// let strict = DecodeOptions {
///     strict_surrogate_pairs: true,
/// };
/// let err = decode_with(&bytes, strict).unwrap_err();
/// assert_eq!(err.kind(), DecodeErrorKind::InvalidSurrogatePair);
/// assert_eq!(err.offset(), 0);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeOptions {
    /// Whether six-byte sequences must form a well-shaped surrogate pair.
    ///
    /// When `true`, the five bytes after a surrogate-pair lead must match
    /// `1010xxxx 10xxxxxx 11101101 1011xxxx 10xxxxxx`; anything else fails
    /// with [`DecodeErrorKind::InvalidSurrogatePair`]. When `false`, the
    /// second half's lead byte is skipped unchecked and only the payload
    /// bits of the other bytes are read.
    ///
    /// # Default
    ///
    /// `false`
    ///
    /// [`DecodeErrorKind::InvalidSurrogatePair`]: crate::DecodeErrorKind::InvalidSurrogatePair
    pub strict_surrogate_pairs: bool,
}
