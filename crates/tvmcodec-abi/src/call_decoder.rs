//! TVM function-call decoder bound to one contract ABI.
//!
//! A thin owner of the parsed ABI over the free functions in
//! [`crate::decoder`], for callers decoding many calls to the same contract.

use tvmcodec_core::{parse_abi_json, AbiEntry, DecodeError, DecodedCall, DecodedOutput};

use crate::decoder;
use crate::selector::{method_signature, selector};

/// TVM function-call decoder.
///
/// Accepts an ABI JSON string (standard JSON ABI or a full node `entrys`
/// object) and decodes call data and return data against it.
#[derive(Debug, Clone)]
pub struct TvmCallDecoder {
    abi: Vec<AbiEntry>,
}

impl TvmCallDecoder {
    pub fn new(abi: Vec<AbiEntry>) -> Self {
        Self { abi }
    }

    /// Create a decoder from ABI JSON.
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidAbi` if the JSON is not an ABI.
    pub fn from_abi_json(abi_json: &str) -> Result<Self, DecodeError> {
        Ok(Self::new(parse_abi_json(abi_json)?))
    }

    pub fn abi(&self) -> &[AbiEntry] {
        &self.abi
    }

    /// Decode call data; see [`decoder::decode_input`].
    pub fn decode_input(&self, call_data: &str) -> Result<DecodedCall, DecodeError> {
        decoder::decode_input(&self.abi, call_data)
    }

    /// Decode return data for a call; see [`decoder::decode_output`].
    pub fn decode_output(&self, call_data: &str, result: &str) -> Result<DecodedOutput, DecodeError> {
        decoder::decode_output(&self.abi, call_data, result)
    }

    /// Returns all function names in this ABI.
    pub fn function_names(&self) -> Vec<&str> {
        self.functions().map(|(name, _)| name).collect()
    }

    /// `(signature, selector)` for every named function, in ABI order.
    pub fn signatures(&self) -> Vec<(String, [u8; 4])> {
        self.functions()
            .map(|(name, entry)| {
                let sig = method_signature(name, &entry.inputs);
                let sel = selector(&sig);
                (sig, sel)
            })
            .collect()
    }

    /// Returns the 4-byte selector for the first function named `name`.
    pub fn selector_for(&self, name: &str) -> Option<[u8; 4]> {
        self.functions()
            .find(|(n, _)| *n == name)
            .map(|(n, entry)| selector(&method_signature(n, &entry.inputs)))
    }

    fn functions(&self) -> impl Iterator<Item = (&str, &AbiEntry)> {
        self.abi
            .iter()
            .filter(|e| e.kind.is_function())
            .filter_map(|e| e.name.as_deref().map(|n| (n, e)))
    }
}
