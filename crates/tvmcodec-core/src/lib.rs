//! # tvmcodec-core
//!
//! Core types, error taxonomy and small helpers shared by every TvmCodec
//! crate. The ABI codec itself lives in `tvmcodec-abi`; nothing in here
//! decodes bytes beyond hex and base58.

pub mod abi;
pub mod address;
pub mod call;
pub mod error;
pub mod hex_util;
pub mod status;
pub mod types;

pub use abi::{parse_abi_json, AbiEntry, AbiParameter, EntryKind};
pub use call::{DecodedCall, DecodedOutput, DecodedValues};
pub use error::DecodeError;
pub use status::{ExecutionStatus, RevertResult};
pub use types::DecodedValue;
