use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;

use crate::{
    DecodeError, DecodeErrorKind, DecodeOptions, MAX_SEQUENCE_LEN, backend::Codec,
    decode::decode_sequence, encode_char,
};

/// Codec that copies runs of ASCII in bulk and only classifies the bytes
/// around them one sequence at a time.
///
/// Mostly-ASCII input (identifiers, descriptors, typical constant pool
/// strings) decodes and encodes with a memchr-style scan instead of a branch
/// per byte.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BulkCodec {
    options: DecodeOptions,
}

impl BulkCodec {
    /// A bulk codec decoding with `options`.
    #[must_use]
    pub const fn new(options: DecodeOptions) -> Self {
        Self { options }
    }
}

impl Codec for BulkCodec {
    fn name(&self) -> &'static str {
        "bulk"
    }

    fn options(&self) -> DecodeOptions {
        self.options
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        let mut out = String::with_capacity(bytes.len());
        let mut ix = 0;
        while ix < bytes.len() {
            let rest = &bytes[ix..];
            let run = rest.find_non_ascii_byte().unwrap_or(rest.len());
            if run == 0 {
                let (ch, width) = decode_sequence(bytes, ix, self.options)?;
                out.push(ch);
                ix += width;
                continue;
            }

            let ascii = &rest[..run];
            if let Some(nul) = ascii.find_byte(0) {
                return Err(DecodeError::new(DecodeErrorKind::NullByte, ix + nul));
            }
            // SAFETY: `find_non_ascii_byte` ends the run before the first byte
            // above 0x7F, and ASCII is valid UTF-8.
            out.push_str(unsafe { core::str::from_utf8_unchecked(ascii) });
            ix += run;
        }
        Ok(out)
    }

    fn encode_into(&self, text: &str, out: &mut Vec<u8>) {
        // NUL grows 1 -> 2 bytes and supplementary characters 4 -> 6; nothing
        // grows by more than a factor of two.
        out.reserve(text.len().saturating_mul(2));

        let bytes = text.as_bytes();
        let mut buf = [0; MAX_SEQUENCE_LEN];
        let mut ix = 0;
        while ix < bytes.len() {
            let rest = &bytes[ix..];
            let ascii = rest.find_non_ascii_byte().unwrap_or(rest.len());
            let run = rest[..ascii].find_byte(0).unwrap_or(ascii);
            if run > 0 {
                out.extend_from_slice(&rest[..run]);
                ix += run;
                continue;
            }

            // Runs stop before a NUL or a non-ASCII lead, so `ix` is on a
            // char boundary.
            let Some(ch) = text[ix..].chars().next() else {
                break;
            };
            out.extend_from_slice(encode_char(ch, &mut buf));
            ix += ch.len_utf8();
        }
    }
}
