//! Decode a data-carrier payload into text
//!
//! The payload is hex. Whitespace-separated pushes are decoded one by one and
//! concatenated, so `OP_RETURN 6869 2121` reads as `hi!!`. Anything that is not
//! hex, or whose bytes are not UTF-8, comes back untouched as
//! [`DecodingOutcome::RawUndecodable`].

use crate::types::DecodingOutcome;

/// Classify an encoded payload
pub fn decode_payload(encoded: &str) -> DecodingOutcome {
    match decode_hex_pushes(encoded) {
        Some(bytes) => match String::from_utf8(bytes) {
            Ok(text) => DecodingOutcome::Decoded(text),
            Err(_) => DecodingOutcome::RawUndecodable(encoded.to_string()),
        },
        None => DecodingOutcome::RawUndecodable(encoded.to_string()),
    }
}

fn decode_hex_pushes(encoded: &str) -> Option<Vec<u8>> {
    let mut bytes = Vec::with_capacity(encoded.len() / 2);
    for push in encoded.split_ascii_whitespace() {
        bytes.extend(hex::decode(push).ok()?);
    }
    Some(bytes)
}
