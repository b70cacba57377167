use alloc::{string::String, vec::Vec};

use crate::{DecodeError, DecodeOptions, backend::Codec, decode, encode};

/// Reference codec: one lead byte classification per code point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScalarCodec {
    options: DecodeOptions,
}

impl ScalarCodec {
    /// A scalar codec decoding with `options`.
    #[must_use]
    pub const fn new(options: DecodeOptions) -> Self {
        Self { options }
    }
}

impl Codec for ScalarCodec {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn options(&self) -> DecodeOptions {
        self.options
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        decode::decode_with(bytes, self.options)
    }

    fn encode_into(&self, text: &str, out: &mut Vec<u8>) {
        encode::encode_into(text, out);
    }
}
