//! Interchangeable codec implementations.
//!
//! Every [`Codec`] must be a drop-in replacement for every other: the same
//! bytes for the same text, and the same text or the same [`DecodeError`]
//! (offset and kind) for the same bytes.

mod bulk;
mod scalar;

use alloc::{string::String, vec::Vec};

pub use bulk::BulkCodec;
pub use scalar::ScalarCodec;

use crate::{DecodeError, DecodeOptions};

/// An implementation of the MUTF-8 encode/decode contract.
pub trait Codec {
    /// Short name used in benchmark and test labels.
    fn name(&self) -> &'static str;

    /// The options this codec decodes with.
    fn options(&self) -> DecodeOptions;

    /// Decode MUTF-8 bytes into text.
    ///
    /// # Errors
    ///
    /// Returns the first [`DecodeError`] found in `bytes`.
    fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError>;

    /// Append the MUTF-8 encoding of `text` to `out`.
    fn encode_into(&self, text: &str, out: &mut Vec<u8>);

    /// Encode text as MUTF-8.
    fn encode(&self, text: &str) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(text, &mut out);
        out
    }
}
