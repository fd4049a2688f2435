//! # tvmcodec-abi
//!
//! Call-data, return-data and revert decoder for the Tron virtual machine.
//! The TVM uses the Solidity ABI unchanged, so decoding goes through
//! `alloy-core`'s dynamic ABI codec.
//!
//! ## Pipeline
//! - [`canonical`] renders parameter types (tuples expanded) for signatures
//! - [`selector`] recomputes `keccak256(signature)[..4]` per function and
//!   finds the entry the call data targets
//! - [`decoder`] decodes inputs from call data and outputs from result bytes
//! - [`revert`] extracts the revert reason keyed off the execution status
//!
//! Every operation is a pure function over its arguments.

pub mod call_decoder;
pub mod canonical;
pub mod decoder;
pub mod normalizer;
pub mod revert;
pub mod selector;

pub use call_decoder::TvmCallDecoder;
pub use canonical::{canonical_type, canonical_types};
pub use decoder::{decode_input, decode_input_bytes, decode_output, decode_params};
pub use revert::{extract_revert, extract_revert_with, RevertConfig, RevertStrategy};
pub use selector::{method_signature, resolve, selector, selector_hex, ResolvedFunction};
