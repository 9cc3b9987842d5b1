//! ISO-8859-1 text codec
//!
//! The patent office pages and the generated report both use ISO-8859-1,
//! where every byte is the code point of the same value.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("character {ch:?} at byte offset {offset} has no ISO-8859-1 representation")]
pub struct UnencodableChar {
    pub ch: char,
    pub offset: usize,
}

/// Decode ISO-8859-1 bytes. Every byte sequence is valid.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Encode text as ISO-8859-1, failing on the first character above U+00FF.
pub fn encode_latin1(text: &str) -> Result<Vec<u8>, UnencodableChar> {
    text.char_indices()
        .map(|(offset, ch)| u8::try_from(ch).map_err(|_| UnencodableChar { ch, offset }))
        .collect()
}
