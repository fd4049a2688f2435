//! Full-node / TronGrid HTTP source.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;
use tvmcodec_core::{address, AbiEntry};

use async_trait::async_trait;

use crate::error::SourceError;
use crate::source::TronSource;
use crate::types::{SmartContract, Transaction, TransactionInfo};

/// Header TronGrid reads the API key from.
pub const API_KEY_HEADER: &str = "TRON-PRO-API-KEY";

/// Connection settings for [`HttpSource`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Full node HTTP API base, e.g. "https://api.trongrid.io"
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// TronGrid API key, sent as `TRON-PRO-API-KEY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    "https://api.trongrid.io".into()
}
fn default_timeout_ms() -> u64 { 15_000 }
fn default_user_agent() -> String {
    format!("tvmcodec/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl SourceConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

/// [`TronSource`] over a full node's HTTP API.
pub struct HttpSource {
    client: Client,
    config: SourceConfig,
}

impl HttpSource {
    pub fn new(config: SourceConfig) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| SourceError::Other(format!("invalid API key header: {e}")))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// POST `body` to `path`; an empty JSON object means "not found".
    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<Option<T>, SourceError> {
        let url = format!("{}/{}", self.config.endpoint.trim_end_matches('/'), path);
        debug!(%url, "full node request");

        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::Status { code: status.as_u16(), url, body });
        }

        let value: Value = resp.json().await?;
        if is_empty_response(&value) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(value)?))
    }
}

fn is_empty_response(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[async_trait]
impl TronSource for HttpSource {
    async fn transaction(&self, tx_id: &str) -> Result<Option<Transaction>, SourceError> {
        self.post("wallet/gettransactionbyid", json!({ "value": tx_id })).await
    }

    async fn transaction_info(&self, tx_id: &str) -> Result<Option<TransactionInfo>, SourceError> {
        self.post("wallet/gettransactioninfobyid", json!({ "value": tx_id })).await
    }

    async fn contract_abi(&self, contract: &str) -> Result<Option<Vec<AbiEntry>>, SourceError> {
        // Accept base58 or 0x input; the node wants 41-hex when visible is false
        let hex_address = address::to_hex(contract).map_err(|e| SourceError::Other(e.to_string()))?;
        let contract: Option<SmartContract> = self
            .post("wallet/getcontract", json!({ "value": hex_address, "visible": false }))
            .await?;
        Ok(contract
            .map(|c| c.abi.entrys)
            .filter(|entries| !entries.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_from_empty_json() {
        let cfg: SourceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.endpoint, "https://api.trongrid.io");
        assert_eq!(cfg.timeout_ms, 15_000);
        assert!(cfg.api_key.is_none());
        assert!(cfg.user_agent.starts_with("tvmcodec/"));
    }

    #[test]
    fn config_overrides() {
        let cfg: SourceConfig = serde_json::from_str(
            r#"{"endpoint":"https://nile.trongrid.io","api_key":"k","timeout_ms":500}"#,
        )
        .unwrap();
        assert_eq!(cfg.endpoint, "https://nile.trongrid.io");
        assert_eq!(cfg.api_key.as_deref(), Some("k"));
        assert!(HttpSource::new(cfg).is_ok());
    }

    #[test]
    fn rejects_unprintable_api_key() {
        let cfg = SourceConfig {
            api_key: Some("bad\nkey".into()),
            ..SourceConfig::default()
        };
        assert!(matches!(HttpSource::new(cfg), Err(SourceError::Other(_))));
    }

    #[test]
    fn empty_object_is_not_found() {
        assert!(is_empty_response(&json!({})));
        assert!(is_empty_response(&Value::Null));
        assert!(!is_empty_response(&json!({"txID": "ab"})));
    }
}
