//! Tron address conversion.
//!
//! A Tron account is the same 20-byte account id the ABI carries, shown in
//! one of three forms:
//! - hex with the `41` network prefix: `41a614f803b6fd780986a42c78ec9c7f77e6ded13c`
//! - EVM style: `0xa614f803B6FD780986A42c78Ec9c7f77e6DeD13C`
//! - base58check over `41 ++ id`: `TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t`

use crate::error::DecodeError;
use crate::hex_util::strip_hex_prefix;

/// Network prefix byte of mainnet Tron addresses.
pub const TRON_ADDRESS_PREFIX: u8 = 0x41;

/// Parse any of the three forms into the 20-byte account id.
pub fn parse(addr: &str) -> Result<[u8; 20], DecodeError> {
    let addr = addr.trim();
    let bytes = if addr.starts_with('T') {
        bs58::decode(addr)
            .with_check(None)
            .into_vec()
            .map_err(|e| DecodeError::InvalidAddress {
                reason: format!("base58check '{addr}': {e}"),
            })?
    } else {
        hex::decode(strip_hex_prefix(addr)).map_err(|e| DecodeError::InvalidAddress {
            reason: format!("hex '{addr}': {e}"),
        })?
    };

    let id = match bytes.len() {
        21 if bytes[0] == TRON_ADDRESS_PREFIX => &bytes[1..],
        20 => &bytes[..],
        n => {
            return Err(DecodeError::InvalidAddress {
                reason: format!("'{addr}' is {n} bytes, expected 20 or 41-prefixed 21"),
            })
        }
    };

    let mut out = [0u8; 20];
    out.copy_from_slice(id);
    Ok(out)
}

/// Render as base58check (`T...`).
pub fn to_base58(addr: &str) -> Result<String, DecodeError> {
    Ok(bs58::encode(prefixed(&parse(addr)?)).with_check().into_string())
}

/// Render as lowercase hex with the `41` prefix, the form full nodes expect
/// when `visible` is false.
pub fn to_hex(addr: &str) -> Result<String, DecodeError> {
    Ok(hex::encode(prefixed(&parse(addr)?)))
}

fn prefixed(id: &[u8; 20]) -> [u8; 21] {
    let mut out = [0u8; 21];
    out[0] = TRON_ADDRESS_PREFIX;
    out[1..].copy_from_slice(id);
    out
}
