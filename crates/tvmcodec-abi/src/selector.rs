//! Selector computation and ABI entry resolution.
//!
//! A call's first 4 bytes are `keccak256(signature)[..4]` where the
//! signature is `name(type1,type2,...)` over canonical input types. The
//! resolver recomputes that selector for every function entry and returns
//! the first one that matches.

use tiny_keccak::{Hasher, Keccak};
use tracing::{debug, trace};
use tvmcodec_core::{AbiEntry, AbiParameter};

use crate::canonical::{canonical_type, canonical_types};

/// Build `name(type1,type2,...)` from canonical input types.
pub fn method_signature(name: &str, inputs: &[AbiParameter]) -> String {
    format!("{name}({})", canonical_types(inputs).join(","))
}

/// `keccak256(signature)[..4]`
pub fn selector(signature: &str) -> [u8; 4] {
    let mut k = Keccak::v256();
    k.update(signature.as_bytes());
    let mut out = [0u8; 32];
    k.finalize(&mut out);
    [out[0], out[1], out[2], out[3]]
}

/// The selector as lowercase hex, no `0x` prefix.
pub fn selector_hex(signature: &str) -> String {
    hex::encode(selector(signature))
}

/// The ABI entry a selector resolved to, with its parameter lists prepared
/// for decoding.
#[derive(Debug, Clone)]
pub struct ResolvedFunction<'a> {
    pub entry: &'a AbiEntry,
    pub name: &'a str,
    pub signature: String,
    pub selector: [u8; 4],
    pub input_names: Vec<Option<String>>,
    pub input_types: Vec<String>,
    /// `None` when the entry declares no `outputs` at all.
    pub output_names: Option<Vec<Option<String>>>,
    pub output_types: Option<Vec<String>>,
}

impl<'a> ResolvedFunction<'a> {
    fn new(entry: &'a AbiEntry, name: &'a str, signature: String, selector: [u8; 4]) -> Self {
        let (input_names, input_types) = param_lists(&entry.inputs);
        let (output_names, output_types) = match entry.outputs.as_deref() {
            Some(outputs) => {
                let (names, types) = param_lists(outputs);
                (Some(names), Some(types))
            }
            None => (None, None),
        };
        Self {
            entry,
            name,
            signature,
            selector,
            input_names,
            input_types,
            output_names,
            output_types,
        }
    }

    pub fn selector_hex(&self) -> String {
        hex::encode(self.selector)
    }
}

/// Parallel (names, canonical types) for a parameter list.
///
/// A tuple array's declared name labels the whole list rather than a leaf
/// value, so it is reported as `None`.
fn param_lists(params: &[AbiParameter]) -> (Vec<Option<String>>, Vec<String>) {
    params
        .iter()
        .map(|p| {
            let name = if p.is_tuple_array() { None } else { p.name.clone() };
            (name, canonical_type(p))
        })
        .unzip()
}

/// Find the function entry whose recomputed selector equals `selector`.
///
/// Events, constructors and every other non-function entry are skipped, as
/// are functions without a name. The first match in ABI order wins.
/// Returns `None` when nothing matches; that is not an error.
pub fn resolve(selector_bytes: [u8; 4], abi: &[AbiEntry]) -> Option<ResolvedFunction<'_>> {
    for entry in abi.iter().filter(|e| e.kind.is_function()) {
        let Some(name) = entry.name.as_deref() else {
            continue;
        };
        let signature = method_signature(name, &entry.inputs);
        let candidate = selector(&signature);
        trace!(%signature, selector = %hex::encode(candidate), "selector candidate");
        if candidate == selector_bytes {
            debug!(%signature, "selector matched");
            return Some(ResolvedFunction::new(entry, name, signature, candidate));
        }
    }
    debug!(selector = %hex::encode(selector_bytes), entries = abi.len(), "no ABI entry matches selector");
    None
}
