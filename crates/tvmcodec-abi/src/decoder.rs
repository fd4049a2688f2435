//! Parameter decoding for call data and return data.
//!
//! - Call data: `selector(4) ++ abi_encode_params(inputs)`
//! - Return data: `abi_encode_params(outputs)`, supplied separately
//!
//! Both go through the same codec; a payload too short or malformed for
//! the declared types is an `AbiDecodeFailed` error and is never masked.

use alloy_core::dyn_abi::{DynSolType, DynSolValue};
use tracing::debug;
use tvmcodec_core::{
    hex_util::{decode_hex, has_hex_prefix, hex_pairs_to_string},
    AbiEntry, DecodeError, DecodedCall, DecodedOutput, DecodedValue,
};

use crate::normalizer;
use crate::selector::resolve;

/// Decode call data (hex, optionally `0x`-prefixed) against an ABI.
///
/// Returns [`DecodedCall::unmatched`] when no function's selector matches.
pub fn decode_input(abi: &[AbiEntry], call_data: &str) -> Result<DecodedCall, DecodeError> {
    decode_input_bytes(abi, &decode_hex(call_data)?)
}

/// Decode raw call-data bytes against an ABI.
pub fn decode_input_bytes(abi: &[AbiEntry], call_data: &[u8]) -> Result<DecodedCall, DecodeError> {
    let Some((selector, params)) = split_selector(call_data) else {
        debug!(len = call_data.len(), "call data shorter than a selector");
        return Ok(DecodedCall::unmatched());
    };
    let Some(func) = resolve(selector, abi) else {
        return Ok(DecodedCall::unmatched());
    };

    let values = decode_params(&func.input_types, params)?;
    Ok(DecodedCall {
        method_name: Some(func.name.to_string()),
        parameter_names: func.input_names,
        parameter_types: func.input_types,
        values: values.into(),
    })
}

/// Decode a call's return data.
///
/// `call_data` selects the ABI entry; `result` is the execution result. In
/// order:
/// 1. no matching entry → `Values(DecodedCall::unmatched())`
/// 2. entry declares no `outputs` → empty `Values` for that method
/// 3. `result` does not begin with `0x` → it is a node failure message;
///    returned as `FailureMessage` without touching the codec
/// 4. otherwise decode against the entry's output types
pub fn decode_output(
    abi: &[AbiEntry],
    call_data: &str,
    result: &str,
) -> Result<DecodedOutput, DecodeError> {
    let call_bytes = decode_hex(call_data)?;
    let Some(func) = split_selector(&call_bytes).and_then(|(sel, _)| resolve(sel, abi)) else {
        return Ok(DecodedOutput::Values(DecodedCall::unmatched()));
    };

    let (Some(names), Some(types)) = (func.output_names, func.output_types) else {
        return Ok(DecodedOutput::Values(DecodedCall::empty(func.name)));
    };

    if !has_hex_prefix(result) {
        debug!(method = func.name, "result is a failure message, not return data");
        return Ok(DecodedOutput::FailureMessage(hex_pairs_to_string(result)));
    }

    let values = decode_params(&types, &decode_hex(result)?)?;
    Ok(DecodedOutput::Values(DecodedCall {
        method_name: Some(func.name.to_string()),
        parameter_names: names,
        parameter_types: types,
        values: values.into(),
    }))
}

/// ABI-decode `data` as the parameter sequence `types`.
///
/// `types` are canonical type strings (`uint256`, `(address,uint256)[]`, ...).
pub fn decode_params(types: &[String], data: &[u8]) -> Result<Vec<DecodedValue>, DecodeError> {
    if types.is_empty() {
        return Ok(vec![]);
    }

    let sol_types = types
        .iter()
        .map(|ty| {
            DynSolType::parse(ty).map_err(|e| DecodeError::UnsupportedType {
                ty: ty.clone(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let decoded = DynSolType::Tuple(sol_types)
        .abi_decode_params(data)
        .map_err(|e| DecodeError::AbiDecodeFailed {
            reason: format!("{} bytes as ({}): {e}", data.len(), types.join(",")),
        })?;

    let values = match decoded {
        DynSolValue::Tuple(vals) => vals,
        other => vec![other],
    };
    Ok(values.into_iter().map(normalizer::normalize).collect())
}

fn split_selector(call_data: &[u8]) -> Option<([u8; 4], &[u8])> {
    if call_data.len() < 4 {
        return None;
    }
    let (head, rest) = call_data.split_at(4);
    Some((head.try_into().ok()?, rest))
}
