//! Reading and decoding of the generator input.
//!
//! The input is a single JSON object. Its keys are kept in the order they
//! appear in the text (`serde_json` is built with `preserve_order`), which is
//! what makes the generated output reproducible.

use std::io::Read;

use serde_json::{Map, Value};

use crate::Error;

/// Reads `reader` until end-of-stream.
///
/// Interrupted reads are retried; any other failure is an [`Error::Read`].
pub fn read_all<R: Read>(mut reader: R) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(Error::Read)?;
    Ok(buf)
}

/// Decodes `bytes` as exactly one top-level JSON object.
pub fn decode(bytes: &[u8]) -> Result<Map<String, Value>, Error> {
    Ok(serde_json::from_slice::<Map<String, Value>>(bytes)?)
}
