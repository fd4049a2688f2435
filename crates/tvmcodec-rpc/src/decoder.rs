//! Decode-by-id entry points.
//!
//! Each entry point sequences its fetches (transaction, then ABI and/or
//! execution info) and hands the raw hex to `tvmcodec-abi`. A failed fetch
//! ends the call before any decode is attempted.

use tracing::{debug, warn};
use tvmcodec_abi::{decode_input, decode_output, extract_revert_with, RevertConfig};
use tvmcodec_core::{AbiEntry, DecodedCall, DecodedOutput, RevertResult};

use crate::error::TxDecodeError;
use crate::source::TronSource;
use crate::types::{Transaction, TransactionInfo};

/// Decodes transactions by id against a [`TronSource`].
///
/// Holds no cache: every call fetches the transaction and, when needed, the
/// contract ABI anew.
pub struct TxDecoder<S> {
    source: S,
    revert: RevertConfig,
}

impl<S: TronSource> TxDecoder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            revert: RevertConfig::default(),
        }
    }

    pub fn with_revert_config(mut self, config: RevertConfig) -> Self {
        self.revert = config;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Decode the call data of transaction `tx_id`.
    pub async fn decode_input_by_id(&self, tx_id: &str) -> Result<DecodedCall, TxDecodeError> {
        let tx = self.fetch_transaction(tx_id).await?;
        let (call_data, contract) = contract_call(&tx, tx_id)?;
        let abi = self.fetch_abi(contract).await?;
        Ok(decode_input(&abi, &call_data)?)
    }

    /// Decode the return data of transaction `tx_id`.
    ///
    /// A failed call yields [`DecodedOutput::FailureMessage`] when the node
    /// recorded a `resMessage` and no return data.
    pub async fn decode_output_by_id(&self, tx_id: &str) -> Result<DecodedOutput, TxDecodeError> {
        let tx = self.fetch_transaction(tx_id).await?;
        let (call_data, contract) = contract_call(&tx, tx_id)?;
        let abi = self.fetch_abi(contract).await?;
        let info = self.fetch_info(tx_id).await?;
        Ok(decode_output(&abi, &call_data, &info.encoded_result())?)
    }

    /// Extract the revert reason of transaction `tx_id`.
    ///
    /// Execution info is only fetched when the transaction reverted.
    pub async fn decode_revert_by_id(&self, tx_id: &str) -> Result<RevertResult, TxDecodeError> {
        let tx = self.fetch_transaction(tx_id).await?;
        let status = tx.status();
        if !status.is_revert() {
            debug!(tx_id, %status, "not a revert, skipping execution info");
            return Ok(RevertResult::without_message(status));
        }

        let info = self.fetch_info(tx_id).await?;
        let result = info.contract_result.first().map(String::as_str).unwrap_or_default();
        Ok(extract_revert_with(status, result, &self.revert)?)
    }

    async fn fetch_transaction(&self, tx_id: &str) -> Result<Transaction, TxDecodeError> {
        debug!(tx_id, "fetching transaction");
        self.source
            .transaction(tx_id)
            .await?
            .ok_or_else(|| TxDecodeError::NotFound {
                what: "transaction",
                id: tx_id.to_string(),
            })
    }

    async fn fetch_info(&self, tx_id: &str) -> Result<TransactionInfo, TxDecodeError> {
        debug!(tx_id, "fetching transaction info");
        self.source
            .transaction_info(tx_id)
            .await?
            .ok_or_else(|| TxDecodeError::NotFound {
                what: "transaction info",
                id: tx_id.to_string(),
            })
    }

    async fn fetch_abi(&self, contract: &str) -> Result<Vec<AbiEntry>, TxDecodeError> {
        debug!(contract, "fetching contract ABI");
        match self.source.contract_abi(contract).await? {
            Some(abi) if !abi.is_empty() => Ok(abi),
            _ => {
                warn!(contract, "contract has no ABI");
                Err(TxDecodeError::NotFound {
                    what: "contract ABI",
                    id: contract.to_string(),
                })
            }
        }
    }
}

/// `(call_data, contract_address)` of a smart-contract call.
fn contract_call<'a>(tx: &'a Transaction, tx_id: &str) -> Result<(String, &'a str), TxDecodeError> {
    let contract = tx.contract().ok_or_else(|| TxDecodeError::MissingContractAddress {
        tx_id: tx_id.to_string(),
    })?;
    if !tx.is_contract_call() {
        return Err(TxDecodeError::NotAContractCall {
            tx_id: tx_id.to_string(),
            kind: contract.kind.clone(),
        });
    }
    let address = tx
        .contract_address()
        .ok_or_else(|| TxDecodeError::MissingContractAddress { tx_id: tx_id.to_string() })?;
    let call_data = tx.call_data().unwrap_or_else(|| "0x".to_string());
    Ok((call_data, address))
}
