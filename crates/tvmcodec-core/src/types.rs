//! Decoded value type.
//!
//! Every ABI value decoded by TvmCodec, whatever its Solidity type, is
//! represented as a `DecodedValue`.

use alloy_primitives::{I256, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address;

/// A decoded ABI value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum DecodedValue {
    /// `uint8` .. `uint256`
    Uint(U256),
    /// `int8` .. `int256`
    Int(I256),
    Bool(bool),
    /// 20-byte address, `0x`-prefixed and EIP-55 checksummed.
    Address(String),
    /// `bytes1` .. `bytes32`, trimmed to the declared width.
    FixedBytes(Vec<u8>),
    Bytes(Vec<u8>),
    String(String),
    /// Fixed or dynamic array.
    Array(Vec<DecodedValue>),
    /// Tuple / struct, fields in declaration order.
    Tuple(Vec<DecodedValue>),
}

impl DecodedValue {
    pub fn as_uint(&self) -> Option<U256> {
        match self {
            Self::Uint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<I256> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<&str> {
        match self {
            Self::Address(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Raw bytes of a `bytes` or `bytesN` value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) | Self::FixedBytes(b) => Some(b),
            _ => None,
        }
    }

    /// Elements of an array or fields of a tuple.
    pub fn as_slice(&self) -> Option<&[DecodedValue]> {
        match self {
            Self::Array(v) | Self::Tuple(v) => Some(v),
            _ => None,
        }
    }

    /// Render an address value in Tron base58check form (`T...`).
    pub fn to_tron_base58(&self) -> Option<String> {
        self.as_address()
            .and_then(|a| address::to_base58(a).ok())
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uint(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Address(a) => write!(f, "{a}"),
            Self::FixedBytes(b) | Self::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Array(v) => {
                let parts: Vec<_> = v.iter().map(|x| x.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Self::Tuple(v) => {
                let parts: Vec<_> = v.iter().map(|x| x.to_string()).collect();
                write!(f, "({})", parts.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_nested() {
        let v = DecodedValue::Tuple(vec![
            DecodedValue::Uint(U256::from(7u64)),
            DecodedValue::Array(vec![DecodedValue::Bool(true), DecodedValue::Bool(false)]),
            DecodedValue::Bytes(vec![0xde, 0xad]),
        ]);
        assert_eq!(v.to_string(), "(7, [true, false], 0xdead)");
    }

    #[test]
    fn negative_int_display() {
        let v = DecodedValue::Int("-42".parse::<I256>().unwrap());
        assert_eq!(v.to_string(), "-42");
    }

    #[test]
    fn accessors() {
        let addr = DecodedValue::Address("0xa614f803B6FD780986A42c78Ec9c7f77e6DeD13C".into());
        assert!(addr.as_address().is_some());
        assert!(addr.as_uint().is_none());
        assert_eq!(
            addr.to_tron_base58().as_deref(),
            Some("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t")
        );
    }

    #[test]
    fn serde_roundtrip() {
        let val = DecodedValue::Array(vec![
            DecodedValue::Uint(U256::from(1_000_000u64)),
            DecodedValue::String("hi".into()),
        ]);
        let json = serde_json::to_string(&val).unwrap();
        let back: DecodedValue = serde_json::from_str(&json).unwrap();
        assert_eq!(val, back);
    }
}
