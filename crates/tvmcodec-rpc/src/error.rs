//! Error types for the fetch layer and the decode-by-id boundary.

use thiserror::Error;
use tvmcodec_core::DecodeError;

/// Errors raised by a [`crate::TronSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed (connection refused, timeout, etc.).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered with a non-success HTTP status.
    #[error("HTTP {code} from {url}: {body}")]
    Status { code: u16, url: String, body: String },

    /// Response could not be deserialized.
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors from the decode-by-id entry points.
///
/// Every failure inside a fetch-dependent entry point is wrapped here once;
/// no partial result is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum TxDecodeError {
    /// The transaction, its execution info or the contract ABI is missing.
    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },

    #[error("transaction {tx_id} has no target contract address")]
    MissingContractAddress { tx_id: String },

    #[error("transaction {tx_id} is a {kind}, not a smart contract call")]
    NotAContractCall { tx_id: String, kind: String },

    #[error("fetch failed: {0}")]
    Fetch(#[from] SourceError),

    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

impl TxDecodeError {
    /// Returns `true` if the network side located nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
