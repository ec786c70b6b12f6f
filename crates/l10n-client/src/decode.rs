//! Base64 content decoding
//!
//! The contents API ships file bodies as base64, wrapped every 60 columns.
//! The decoded bytes are UTF-8 and must be interpreted as such; decoding to
//! a byte-per-char string mangles every non-ASCII character.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Decode a base64 payload into UTF-8 text
pub fn decode_base64_utf8(encoded: &str) -> Result<String, DecodeError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}
