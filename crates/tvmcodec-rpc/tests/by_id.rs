//! Decode-by-id tests against an in-memory source.

use std::collections::HashMap;

use alloy_core::dyn_abi::DynSolValue;
use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use serde_json::json;
use tvmcodec_abi::{RevertConfig, RevertStrategy};
use tvmcodec_core::{parse_abi_json, AbiEntry, DecodedValue, ExecutionStatus};
use tvmcodec_rpc::{SourceError, Transaction, TransactionInfo, TronSource, TxDecodeError, TxDecoder};

const USDT: &str = "41a614f803b6fd780986a42c78ec9c7f77e6ded13c";

const TRC20_ABI: &str = r#"{"entrys":[
    {"outputs":[{"type":"bool"}],"inputs":[{"name":"_to","type":"address"},{"name":"_value","type":"uint256"}],
     "name":"transfer","stateMutability":"Nonpayable","type":"Function"},
    {"inputs":[{"name":"_value","type":"uint256"}],"name":"burn","type":"Function"}
]}"#;

#[derive(Default)]
struct MemorySource {
    txs: HashMap<String, Transaction>,
    infos: HashMap<String, TransactionInfo>,
    abis: HashMap<String, Vec<AbiEntry>>,
    fail: bool,
}

#[async_trait]
impl TronSource for MemorySource {
    async fn transaction(&self, tx_id: &str) -> Result<Option<Transaction>, SourceError> {
        if self.fail {
            return Err(SourceError::Other("node unreachable".into()));
        }
        Ok(self.txs.get(tx_id).cloned())
    }

    async fn transaction_info(&self, tx_id: &str) -> Result<Option<TransactionInfo>, SourceError> {
        Ok(self.infos.get(tx_id).cloned())
    }

    async fn contract_abi(&self, address: &str) -> Result<Option<Vec<AbiEntry>>, SourceError> {
        Ok(self.abis.get(address).cloned())
    }
}

fn transfer_data() -> String {
    let to: Address = "0xe552f6487585c2b58bc2c9bb4492bc1f17132cd0".parse().unwrap();
    let params = DynSolValue::Tuple(vec![
        DynSolValue::Address(to),
        DynSolValue::Uint(U256::from(1_000_000u64), 256),
    ])
    .abi_encode_params();
    format!("a9059cbb{}", hex::encode(params))
}

fn trigger_tx(id: &str, status: &str, data: &str, contract: Option<&str>) -> Transaction {
    let mut value = json!({ "data": data, "owner_address": "41e552f6487585c2b58bc2c9bb4492bc1f17132cd0" });
    if let Some(addr) = contract {
        value["contract_address"] = json!(addr);
    }
    serde_json::from_value(json!({
        "txID": id,
        "ret": [{ "contractRet": status }],
        "raw_data": { "contract": [{ "type": "TriggerSmartContract", "parameter": { "value": value } }] }
    }))
    .unwrap()
}

fn info(id: &str, result: &str, res_message: Option<&str>) -> TransactionInfo {
    TransactionInfo {
        id: id.into(),
        contract_result: vec![result.into()],
        res_message: res_message.map(Into::into),
    }
}

fn source() -> MemorySource {
    let mut src = MemorySource::default();
    src.abis.insert(USDT.into(), parse_abi_json(TRC20_ABI).unwrap());
    src.txs.insert("ok".into(), trigger_tx("ok", "SUCCESS", &transfer_data(), Some(USDT)));
    src.infos.insert(
        "ok".into(),
        info("ok", "0000000000000000000000000000000000000000000000000000000000000001", None),
    );
    src
}

#[tokio::test]
async fn decodes_input_by_id() {
    let decoder = TxDecoder::new(source());
    let call = decoder.decode_input_by_id("ok").await.unwrap();
    assert_eq!(call.method_name.as_deref(), Some("transfer"));
    assert_eq!(call.parameter_names, vec![Some("_to".into()), Some("_value".into())]);
    assert_eq!(call.value("_value"), Some(&DecodedValue::Uint(U256::from(1_000_000u64))));
}

#[tokio::test]
async fn decodes_output_by_id() {
    let decoder = TxDecoder::new(source());
    let out = decoder.decode_output_by_id("ok").await.unwrap();
    let call = out.as_call().unwrap();
    assert_eq!(call.method_name.as_deref(), Some("transfer"));
    assert_eq!(call.values[0], DecodedValue::Bool(true));
}

#[tokio::test]
async fn failed_call_output_is_failure_message() {
    let mut src = source();
    src.txs.insert("oom".into(), trigger_tx("oom", "OUT_OF_ENERGY", &transfer_data(), Some(USDT)));
    // "Out of energy"
    src.infos.insert("oom".into(), info("oom", "", Some("4f7574206f6620656e65726779")));

    let out = TxDecoder::new(src).decode_output_by_id("oom").await.unwrap();
    assert_eq!(out.as_failure_message(), Some("Out of energy"));
}

#[tokio::test]
async fn missing_transaction_is_not_found() {
    let err = TxDecoder::new(source()).decode_input_by_id("nope").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("nope"));
}

#[tokio::test]
async fn missing_contract_address_fails_before_abi_fetch() {
    let mut src = source();
    src.txs.insert("bare".into(), trigger_tx("bare", "SUCCESS", &transfer_data(), None));

    let err = TxDecoder::new(src).decode_input_by_id("bare").await.unwrap_err();
    assert!(matches!(err, TxDecodeError::MissingContractAddress { ref tx_id } if tx_id == "bare"));
}

#[tokio::test]
async fn transfer_contract_is_not_a_contract_call() {
    let mut src = source();
    let tx: Transaction = serde_json::from_value(json!({
        "txID": "trx",
        "ret": [{ "contractRet": "SUCCESS" }],
        "raw_data": { "contract": [{ "type": "TransferContract",
            "parameter": { "value": { "amount": 1, "to_address": USDT } } }] }
    }))
    .unwrap();
    src.txs.insert("trx".into(), tx);

    let err = TxDecoder::new(src).decode_input_by_id("trx").await.unwrap_err();
    assert!(matches!(err, TxDecodeError::NotAContractCall { ref kind, .. } if kind == "TransferContract"));
}

#[tokio::test]
async fn unknown_contract_abi_is_not_found() {
    let mut src = source();
    let other = "41e552f6487585c2b58bc2c9bb4492bc1f17132cd0";
    src.txs.insert("x".into(), trigger_tx("x", "SUCCESS", &transfer_data(), Some(other)));

    let err = TxDecoder::new(src).decode_input_by_id("x").await.unwrap_err();
    match err {
        TxDecodeError::NotFound { what, id } => {
            assert_eq!(what, "contract ABI");
            assert_eq!(id, other);
        }
        e => panic!("unexpected error: {e}"),
    }
}

#[tokio::test]
async fn fetch_failure_propagates() {
    let src = MemorySource { fail: true, ..source() };
    let err = TxDecoder::new(src).decode_input_by_id("ok").await.unwrap_err();
    assert!(matches!(err, TxDecodeError::Fetch(SourceError::Other(_))));
}

#[tokio::test]
async fn truncated_call_data_is_decode_error() {
    let mut src = source();
    src.txs.insert("short".into(), trigger_tx("short", "SUCCESS", "a9059cbb0000", Some(USDT)));

    let err = TxDecoder::new(src).decode_input_by_id("short").await.unwrap_err();
    assert!(matches!(err, TxDecodeError::Decode(ref e) if e.is_payload_mismatch()));
}

#[tokio::test]
async fn revert_reason_by_id() {
    let mut src = source();
    src.txs.insert("rv".into(), trigger_tx("rv", "REVERT", &transfer_data(), Some(USDT)));
    src.infos.insert(
        "rv".into(),
        info(
            "rv",
            "08c379a0\
             0000000000000000000000000000000000000000000000000000000000000020\
             000000000000000000000000000000000000000000000000000000000000001b\
             506c6f74206973206e6f742063757272656e746c79206f776e65640000000000",
            None,
        ),
    );

    let r = TxDecoder::new(src).decode_revert_by_id("rv").await.unwrap();
    assert_eq!(r.status, ExecutionStatus::Revert);
    assert_eq!(r.message, "Plot is not currently owned");
}

#[tokio::test]
async fn long_revert_reason_with_abi_string_strategy() {
    let reason = "SafeMath: subtraction overflow while settling the plot";
    let mut payload = vec![0x08, 0xc3, 0x79, 0xa0];
    payload.extend(DynSolValue::Tuple(vec![DynSolValue::String(reason.into())]).abi_encode_params());

    let mut src = source();
    src.txs.insert("long".into(), trigger_tx("long", "REVERT", &transfer_data(), Some(USDT)));
    src.infos.insert("long".into(), info("long", &hex::encode(payload), None));

    let decoder = TxDecoder::new(src).with_revert_config(RevertConfig {
        strategy: RevertStrategy::AbiString,
    });
    let r = decoder.decode_revert_by_id("long").await.unwrap();
    assert_eq!(r.message, reason);
}

#[tokio::test]
async fn non_revert_status_skips_info_fetch() {
    // No info entry for "ok-2": fetching it would be NotFound
    let mut src = source();
    src.txs.insert("ok-2".into(), trigger_tx("ok-2", "SUCCESS", &transfer_data(), Some(USDT)));

    let r = TxDecoder::new(src).decode_revert_by_id("ok-2").await.unwrap();
    assert_eq!(r.status, ExecutionStatus::Success);
    assert_eq!(r.message, "");
}

#[tokio::test]
async fn reverted_without_info_is_not_found() {
    let mut src = source();
    src.txs.insert("rv-2".into(), trigger_tx("rv-2", "REVERT", "", Some(USDT)));

    let err = TxDecoder::new(src).decode_revert_by_id("rv-2").await.unwrap_err();
    assert!(matches!(err, TxDecodeError::NotFound { what: "transaction info", .. }));
}
