//! Converts alloy-core `DynSolValue` → TvmCodec `DecodedValue`.

use alloy_core::dyn_abi::DynSolValue;
use tvmcodec_core::DecodedValue;

/// Convert a decoded `DynSolValue` into a `DecodedValue`.
pub fn normalize(val: DynSolValue) -> DecodedValue {
    match val {
        DynSolValue::Bool(b) => DecodedValue::Bool(b),

        DynSolValue::Int(i, _bits) => DecodedValue::Int(i),

        DynSolValue::Uint(u, _bits) => DecodedValue::Uint(u),

        // The codec stores bytesN in a full word; keep only the declared width
        DynSolValue::FixedBytes(word, size) => DecodedValue::FixedBytes(word[..size].to_vec()),

        DynSolValue::Bytes(b) => DecodedValue::Bytes(b),

        DynSolValue::String(s) => DecodedValue::String(s),

        // EIP-55 checksum encoding
        DynSolValue::Address(a) => DecodedValue::Address(a.to_checksum(None)),

        DynSolValue::Array(vals) | DynSolValue::FixedArray(vals) => {
            DecodedValue::Array(vals.into_iter().map(normalize).collect())
        }

        DynSolValue::Tuple(fields) => {
            DecodedValue::Tuple(fields.into_iter().map(normalize).collect())
        }

        // `function` type: 20-byte address ++ 4-byte selector
        DynSolValue::Function(f) => DecodedValue::FixedBytes(f.to_vec()),
    }
}
