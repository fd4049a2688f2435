//! Revert reason extraction.
//!
//! A reverted call returns `Error(string)` encoded as:
//! `0x08c379a0` ++ offset(32) ++ length(32) ++ utf8 bytes padded to 32
//!
//! The default strategy reads only the trailing 32-byte word and strips the
//! null padding. That covers every reason of up to 32 bytes. Longer reasons
//! need [`RevertStrategy::AbiString`], which decodes the full `Error(string)`
//! payload through the codec.

use alloy_core::dyn_abi::{DynSolType, DynSolValue};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tvmcodec_core::{hex_util::decode_hex, DecodeError, ExecutionStatus, RevertResult};

/// The 4-byte selector for `Error(string)`.
pub const ERROR_STRING_SELECTOR: [u8; 4] = [0x08, 0xc3, 0x79, 0xa0];

/// Width of the trailing word that holds a short reason.
pub const REASON_WORD_LEN: usize = 32;

/// How the reason is read out of a revert payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevertStrategy {
    /// Last 32 bytes as UTF-8, nulls stripped.
    #[default]
    TrailingWord,
    /// Full `Error(string)` decode; falls back to `TrailingWord` when the
    /// payload is not a well-formed `Error(string)`.
    AbiString,
}

/// Revert extraction settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevertConfig {
    #[serde(default)]
    pub strategy: RevertStrategy,
}

/// Extract the revert reason with the default trailing-word strategy.
///
/// Any status other than `REVERT` yields an empty message and `result` is
/// not inspected.
pub fn extract_revert(status: ExecutionStatus, result: &str) -> Result<RevertResult, DecodeError> {
    extract_revert_with(status, result, &RevertConfig::default())
}

/// Extract the revert reason using `config`.
pub fn extract_revert_with(
    status: ExecutionStatus,
    result: &str,
    config: &RevertConfig,
) -> Result<RevertResult, DecodeError> {
    if !status.is_revert() {
        return Ok(RevertResult::without_message(status));
    }

    let data = decode_hex(result)?;
    let message = match config.strategy {
        RevertStrategy::TrailingWord => trailing_word_reason(&data),
        RevertStrategy::AbiString => decode_error_string(&data).unwrap_or_else(|| {
            debug!(len = data.len(), "not an Error(string) payload, reading trailing word");
            trailing_word_reason(&data)
        }),
    };
    Ok(RevertResult { status, message })
}

/// UTF-8 of the last 32 bytes (or fewer, if the payload is shorter), with
/// every null character removed.
pub fn trailing_word_reason(data: &[u8]) -> String {
    let word = &data[data.len().saturating_sub(REASON_WORD_LEN)..];
    String::from_utf8_lossy(word).replace('\0', "")
}

/// Try to decode the revert data as an `Error(string)` payload.
///
/// Returns `Some(message)` on success, `None` if the data doesn't match
/// the expected format.
pub fn decode_error_string(data: &[u8]) -> Option<String> {
    let payload = data.strip_prefix(&ERROR_STRING_SELECTOR[..])?;
    match DynSolType::String.abi_decode(payload) {
        Ok(DynSolValue::String(s)) => Some(s),
        _ => None,
    }
}
