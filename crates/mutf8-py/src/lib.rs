//! Python bindings for [`mutf8`], exposing the same two functions as the
//! pure-Python `mutf8` package so either can back the other's callers.

use pyo3::{exceptions::PyUnicodeDecodeError, prelude::*, types::PyBytes};

/// Codec name reported in `UnicodeDecodeError.encoding`.
pub const ENCODING: &str = "mutf-8";

/// Convert a [`mutf8::DecodeError`] into the `UnicodeDecodeError` Python
/// codecs raise, spanning the rejected lead byte.
pub fn decode_error_to_py(py: Python<'_>, input: &[u8], err: ::mutf8::DecodeError) -> PyErr {
    let data = PyBytes::new(py, input).unbind();
    let start = err.offset();
    PyUnicodeDecodeError::new_err((ENCODING, data, start, start + 1, err.kind().as_str()))
}

/// Decodes a bytestring containing MUTF-8 as defined in section 4.4.7 of the
/// JVM specification.
#[pyfunction]
pub fn decode_modified_utf8(py: Python<'_>, s: &[u8]) -> PyResult<String> {
    ::mutf8::decode(s).map_err(|err| decode_error_to_py(py, s, err))
}

/// Encodes a unicode string as MUTF-8 as defined in section 4.4.7 of the JVM
/// specification.
#[pyfunction]
pub fn encode_modified_utf8<'py>(py: Python<'py>, u: &str) -> Bound<'py, PyBytes> {
    PyBytes::new(py, &::mutf8::encode(u))
}

/// Encoders and decoders for the MUTF-8 encoding.
#[pymodule]
#[pyo3(name = "mutf8")]
pub fn mutf8_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(decode_modified_utf8, m)?)?;
    m.add_function(wrap_pyfunction!(encode_modified_utf8, m)?)?;
    Ok(())
}
