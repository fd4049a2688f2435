//! The `TronSource` trait: the fetch collaborator behind every decode-by-id call.

use async_trait::async_trait;
use tvmcodec_core::AbiEntry;

use crate::error::SourceError;
use crate::types::{Transaction, TransactionInfo};

/// Supplies raw transaction records and contract ABIs.
///
/// `Ok(None)` means the node answered but located nothing; transport
/// failures are `Err`. Implementations must be `Send + Sync` so a decoder
/// can be shared across Tokio tasks.
#[async_trait]
pub trait TronSource: Send + Sync {
    /// `wallet/gettransactionbyid`
    async fn transaction(&self, tx_id: &str) -> Result<Option<Transaction>, SourceError>;

    /// `wallet/gettransactioninfobyid`
    async fn transaction_info(&self, tx_id: &str) -> Result<Option<TransactionInfo>, SourceError>;

    /// `wallet/getcontract` → `abi.entrys`; `None` if the contract is
    /// unknown or publishes no ABI.
    async fn contract_abi(&self, address: &str) -> Result<Option<Vec<AbiEntry>>, SourceError>;
}
