//! # tvmcodec-rpc
//!
//! Decode Tron transactions by id.
//!
//! The network side is a collaborator behind the [`TronSource`] trait: fetch
//! a transaction, fetch its execution info, fetch a contract ABI. [`TxDecoder`]
//! sequences those fetches and hands the raw bytes to `tvmcodec-abi`.
//! [`HttpSource`] is a plain full-node / TronGrid implementation with no
//! retries and no caching; wrap it if you need either.

pub mod decoder;
pub mod error;
pub mod http;
pub mod source;
pub mod types;

pub use decoder::TxDecoder;
pub use error::{SourceError, TxDecodeError};
pub use http::{HttpSource, SourceConfig};
pub use source::TronSource;
pub use types::{SmartContract, Transaction, TransactionInfo};
