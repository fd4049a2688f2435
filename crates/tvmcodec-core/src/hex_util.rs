//! Hex string helpers.
//!
//! Payloads arrive as strings, optionally `0x`-prefixed. The prefix test is
//! strict: only a string that *begins* with `0x` counts as prefixed.

use crate::error::DecodeError;

/// Returns `true` if `s` begins with the two characters `0x`.
pub fn has_hex_prefix(s: &str) -> bool {
    s.starts_with("0x")
}

/// Strip a leading `0x` (or `0X`) if present.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decode a hex string, with or without `0x` prefix, into bytes.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, DecodeError> {
    hex::decode(strip_hex_prefix(s.trim())).map_err(|e| DecodeError::InvalidHex {
        reason: format!("{e}"),
    })
}

/// Read a failure message that a node put in place of return data.
///
/// Hex text (e.g. `"5245564552540..."` for `"REVERT..."`) is read pair by
/// pair, each byte mapped to the character with that code. Anything that
/// is not whole hex pairs is already the message and comes back verbatim.
pub fn hex_pairs_to_string(s: &str) -> String {
    match decode_hex(s) {
        Ok(bytes) => bytes.into_iter().map(char::from).collect(),
        Err(_) => s.to_string(),
    }
}
