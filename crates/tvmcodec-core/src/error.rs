//! Error types for the TvmCodec decode pipeline.

use thiserror::Error;

/// Errors that can occur while decoding call data, return data or a revert.
///
/// A selector that matches no ABI entry is not an error: it is reported as
/// `DecodedCall { method_name: None, .. }`.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The ABI codec rejected the payload (too short, malformed offsets, ...).
    #[error("ABI decode failed: {reason}")]
    AbiDecodeFailed { reason: String },

    #[error("Invalid hex: {reason}")]
    InvalidHex { reason: String },

    #[error("Invalid ABI: {reason}")]
    InvalidAbi { reason: String },

    #[error("Unsupported type '{ty}': {reason}")]
    UnsupportedType { ty: String, reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },
}

impl DecodeError {
    /// Returns `true` if the codec itself rejected the bytes, i.e. the
    /// supplied ABI and payload cannot physically correspond.
    pub fn is_payload_mismatch(&self) -> bool {
        matches!(self, Self::AbiDecodeFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_abi_json;

    #[test]
    fn only_codec_rejection_is_payload_mismatch() {
        assert!(DecodeError::AbiDecodeFailed { reason: "short".into() }.is_payload_mismatch());
        assert!(!DecodeError::InvalidHex { reason: "odd".into() }.is_payload_mismatch());
    }

    #[test]
    fn malformed_abi_json_is_invalid_abi() {
        let err = parse_abi_json(r#"{"entrys": 5}"#).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidAbi { .. }), "{err}");
    }
}
