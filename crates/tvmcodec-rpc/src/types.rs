//! Transaction records as returned by a full node.
//!
//! Only the fields the decoders read are modelled; everything else in the
//! node's JSON is ignored. Shapes follow `wallet/gettransactionbyid`,
//! `wallet/gettransactioninfobyid` and `wallet/getcontract` with
//! `visible: false` (addresses in `41...` hex).

use serde::{Deserialize, Serialize};
use tvmcodec_core::{AbiEntry, ExecutionStatus};

/// The contract type of a smart-contract call.
pub const TRIGGER_SMART_CONTRACT: &str = "TriggerSmartContract";

// ─── Transaction ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "txID", default)]
    pub tx_id: String,
    #[serde(default)]
    pub ret: Vec<TransactionRet>,
    #[serde(default)]
    pub raw_data: RawData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionRet {
    #[serde(rename = "contractRet", default, skip_serializing_if = "Option::is_none")]
    pub contract_ret: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawData {
    #[serde(default)]
    pub contract: Vec<Contract>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contract {
    /// e.g. `TriggerSmartContract`, `TransferContract`
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub parameter: ContractParameter,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractParameter {
    #[serde(default)]
    pub value: ContractValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractValue {
    /// Call data, hex without `0x`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_address: Option<String>,
}

impl Transaction {
    /// The first contract of the transaction; Tron transactions carry one.
    pub fn contract(&self) -> Option<&Contract> {
        self.raw_data.contract.first()
    }

    pub fn is_contract_call(&self) -> bool {
        self.contract()
            .is_some_and(|c| c.kind == TRIGGER_SMART_CONTRACT)
    }

    /// `ret[0].contractRet`; a missing status reads as `DEFAULT`.
    pub fn status(&self) -> ExecutionStatus {
        self.ret
            .first()
            .and_then(|r| r.contract_ret.as_deref())
            .map(ExecutionStatus::parse)
            .unwrap_or(ExecutionStatus::Default)
    }

    /// Call data, `0x`-prefixed. Empty data reads as `0x`.
    pub fn call_data(&self) -> Option<String> {
        let value = &self.contract()?.parameter.value;
        Some(format!("0x{}", value.data.as_deref().unwrap_or_default()))
    }

    /// Target contract address, if non-empty.
    pub fn contract_address(&self) -> Option<&str> {
        self.contract()?
            .parameter
            .value
            .contract_address
            .as_deref()
            .filter(|a| !a.is_empty())
    }
}

// ─── TransactionInfo ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionInfo {
    #[serde(default)]
    pub id: String,
    /// Return data per call, hex without `0x`; `[""]` on failure.
    #[serde(rename = "contractResult", default)]
    pub contract_result: Vec<String>,
    /// Node failure message, hex-encoded ASCII.
    #[serde(rename = "resMessage", default, skip_serializing_if = "Option::is_none")]
    pub res_message: Option<String>,
}

impl TransactionInfo {
    /// The result string the decoders expect.
    ///
    /// `0x` + `contractResult[0]` when there is return data, otherwise the
    /// unprefixed hex `resMessage` (which marks it as a failure message),
    /// otherwise empty.
    pub fn encoded_result(&self) -> String {
        match self.contract_result.first().filter(|r| !r.is_empty()) {
            Some(result) => format!("0x{result}"),
            None => self.res_message.clone().unwrap_or_default(),
        }
    }
}

// ─── SmartContract ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmartContract {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub abi: ContractAbi,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractAbi {
    #[serde(default)]
    pub entrys: Vec<AbiEntry>,
}
