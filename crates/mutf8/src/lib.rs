//! Encoder and decoder for modified UTF-8 (MUTF-8), the string encoding of
//! the JVM class-file format (JVMS §4.4.7).
//!
//! MUTF-8 differs from UTF-8 in two ways, both reproduced exactly here:
//!
//! - U+0000 is written as the overlong pair `C0 80`, so encoded strings never
//!   contain a zero byte.
//! - Code points above U+FFFF are written as a UTF-16 surrogate pair, each
//!   half encoded as a three-byte sequence (six bytes in total), the way
//!   CESU-8 does.
//!
//! ```rust
//! let bytes = mutf8::encode("a\u{0}\u{1F608}");
//! assert_eq!(bytes, b"a\xC0\x80\xED\xA0\xBD\xED\xB8\x88");
//! assert_eq!(mutf8::decode(&bytes).unwrap(), "a\u{0}\u{1F608}");
//!
//! let err = mutf8::decode(b"ab\x00").unwrap_err();
//! assert_eq!(err.offset(), 2);
//! assert_eq!(err.kind(), mutf8::DecodeErrorKind::NullByte);
//! ```
//!
//! The decoder is lenient in the ways class-file readers have always been:
//! continuation bytes are not checked, overlong forms are accepted, and bytes
//! that cannot start a sequence are passed through as the code point of
//! equal value. See [`DecodeOptions`] for the stricter surrogate-pair check.
//!
//! [`backend`] holds interchangeable [`Codec`](backend::Codec)
//! implementations that agree byte for byte and error for error.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod backend;
mod decode;
mod encode;
mod error;
mod lead;
mod options;

#[cfg(test)]
mod tests;

pub use decode::{Decoder, decode, decode_with};
pub use encode::{MAX_SEQUENCE_LEN, char_len, encode, encode_char, encode_chars, encode_into, encoded_len};
pub use error::{DecodeError, DecodeErrorKind};
pub use options::DecodeOptions;
