//! TvmCodec CLI: decode Tron call data, return data and revert reasons.
//!
//! # Commands
//! ```text
//! tvmcodec selector      "transfer(address,uint256)"
//! tvmcodec signatures    --abi <path.json>
//! tvmcodec decode-input  --abi <path.json> --data <hex>
//! tvmcodec decode-output --abi <path.json> --data <hex> --result <hex|message>
//! tvmcodec revert        --status REVERT --result <hex>
//! tvmcodec decode-tx     --id <txid> [--what input|output|revert]
//! tvmcodec address       <T...|41...|0x...>
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tvmcodec_abi::{extract_revert_with, selector_hex, RevertConfig, RevertStrategy, TvmCallDecoder};
use tvmcodec_core::{address, DecodedCall, DecodedOutput, ExecutionStatus, RevertResult};

mod cmd_tx;
mod tracing_setup;

use cmd_tx::TxPart;
use tracing_setup::{init_tracing, LogConfig};

#[derive(Parser)]
#[command(
    name = "tvmcodec",
    about = "Tron (TVM) ABI decoder: call data, return data and revert reasons",
    long_about = "
TvmCodec CLI: decode TVM call data, return data and revert reasons against a
contract ABI, either from raw hex or by transaction id over a full node.

ENVIRONMENT VARIABLES:
  TVMCODEC_ENDPOINT   Full node HTTP API (default https://api.trongrid.io)
  TVMCODEC_API_KEY    TronGrid API key
  RUST_LOG            Overrides --log-level
",
    version
)]
struct Cli {
    /// Log level for stderr output
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Per-crate level, e.g. tvmcodec_rpc=debug (repeatable)
    #[arg(long = "log-component", global = true, value_parser = tracing_setup::parse_component)]
    log_components: Vec<(String, String)>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the 4-byte selector of a canonical signature
    Selector {
        /// e.g. "transfer(address,uint256)"
        signature: String,
    },

    /// List every function signature and selector in an ABI
    Signatures {
        /// Path to the ABI JSON file (array, or {"entrys": [...]})
        #[arg(long)]
        abi: String,
        #[arg(long)]
        json: bool,
    },

    /// Decode call data
    #[command(name = "decode-input")]
    DecodeInput {
        #[arg(long)]
        abi: String,
        /// Call data hex, 0x optional
        #[arg(long)]
        data: String,
        #[arg(long)]
        json: bool,
    },

    /// Decode return data of a call
    #[command(name = "decode-output")]
    DecodeOutput {
        #[arg(long)]
        abi: String,
        /// Call data of the call that produced the result
        #[arg(long)]
        data: String,
        /// 0x-prefixed return data, or an unprefixed hex failure message
        #[arg(long)]
        result: String,
        #[arg(long)]
        json: bool,
    },

    /// Extract a revert reason
    Revert {
        /// Execution status, e.g. REVERT or SUCCESS
        #[arg(long)]
        status: String,
        /// Return data hex
        #[arg(long, default_value = "")]
        result: String,
        /// Decode the full Error(string) payload instead of the last word
        #[arg(long)]
        abi_string: bool,
        #[arg(long)]
        json: bool,
    },

    /// Fetch a transaction by id and decode it
    #[command(name = "decode-tx")]
    DecodeTx {
        /// Transaction id (hex)
        #[arg(long)]
        id: String,
        #[arg(long, value_enum, default_value_t = TxPart::Input)]
        what: TxPart,
        #[arg(long, env = "TVMCODEC_ENDPOINT", default_value = "https://api.trongrid.io")]
        endpoint: String,
        #[arg(long, env = "TVMCODEC_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
        #[arg(long, default_value_t = 15_000)]
        timeout_ms: u64,
        #[arg(long)]
        abi_string: bool,
        #[arg(long)]
        json: bool,
    },

    /// Convert an address between base58 (T...) and hex (41...)
    Address {
        address: String,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&LogConfig {
        level: cli.log_level.clone(),
        components: cli.log_components.iter().cloned().collect(),
        json: cli.log_json,
    });

    match cli.command {
        Commands::Selector { signature } => {
            println!("0x{}", selector_hex(&signature));
            Ok(())
        }

        Commands::Signatures { abi, json } => cmd_signatures(&abi, json),

        Commands::DecodeInput { abi, data, json } => {
            let call = load_decoder(&abi)?.decode_input(&data)?;
            emit(&call, json, print_call)
        }

        Commands::DecodeOutput { abi, data, result, json } => {
            let output = load_decoder(&abi)?.decode_output(&data, &result)?;
            emit(&output, json, print_output)
        }

        Commands::Revert { status, result, abi_string, json } => {
            let revert = extract_revert_with(
                ExecutionStatus::parse(&status),
                &result,
                &revert_config(abi_string),
            )?;
            emit(&revert, json, print_revert)
        }

        Commands::DecodeTx { id, what, endpoint, api_key, timeout_ms, abi_string, json } => {
            let source = tvmcodec_rpc::SourceConfig {
                endpoint,
                api_key,
                timeout_ms,
                ..Default::default()
            };
            cmd_tx::run(&id, what, source, revert_config(abi_string), json).await
        }

        Commands::Address { address: addr, json } => cmd_address(&addr, json),
    }
}

// ─── Command implementations ─────────────────────────────────────────────────

fn load_decoder(abi_path: &str) -> Result<TvmCallDecoder> {
    let abi_json = std::fs::read_to_string(abi_path)
        .with_context(|| format!("read ABI file '{}'", abi_path))?;
    TvmCallDecoder::from_abi_json(&abi_json).with_context(|| format!("parse ABI '{}'", abi_path))
}

fn revert_config(abi_string: bool) -> RevertConfig {
    RevertConfig {
        strategy: if abi_string {
            RevertStrategy::AbiString
        } else {
            RevertStrategy::TrailingWord
        },
    }
}

fn cmd_signatures(abi_path: &str, as_json: bool) -> Result<()> {
    let decoder = load_decoder(abi_path)?;
    let sigs: Vec<_> = decoder
        .signatures()
        .into_iter()
        .map(|(sig, sel)| (sig, format!("0x{}", hex::encode(sel))))
        .collect();

    if as_json {
        let list: Vec<_> = sigs
            .iter()
            .map(|(sig, sel)| serde_json::json!({ "signature": sig, "selector": sel }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        for (sig, sel) in &sigs {
            println!("{}  {}", sel, sig);
        }
    }
    Ok(())
}

fn cmd_address(addr: &str, as_json: bool) -> Result<()> {
    let base58 = address::to_base58(addr).context("invalid Tron address")?;
    let hex = address::to_hex(addr).context("invalid Tron address")?;
    if as_json {
        println!("{}", serde_json::json!({ "base58": base58, "hex": hex }));
    } else {
        println!("base58: {}", base58);
        println!("hex:    {}", hex);
    }
    Ok(())
}

// ─── Output ──────────────────────────────────────────────────────────────────

pub(crate) fn emit<T: serde::Serialize>(value: &T, as_json: bool, print: fn(&T)) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print(value);
    }
    Ok(())
}

pub(crate) fn print_call(call: &DecodedCall) {
    match &call.method_name {
        Some(name) => println!("Method:  {}", name),
        None => {
            println!("Method:  (no matching selector)");
            return;
        }
    }
    if call.is_empty() {
        println!("Values:  (none)");
        return;
    }
    println!("Values:");
    for (i, (name, ty, value)) in call.entries().enumerate() {
        println!("  [{}] {} ({}): {}", i, name.unwrap_or("_"), ty, value);
    }
}

pub(crate) fn print_output(output: &DecodedOutput) {
    match output {
        DecodedOutput::Values(call) => print_call(call),
        DecodedOutput::FailureMessage(msg) => println!("Failure: {}", msg),
    }
}

pub(crate) fn print_revert(revert: &RevertResult) {
    println!("Status:  {}", revert.status);
    if !revert.message.is_empty() {
        println!("Reason:  {}", revert.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn decode_tx_defaults() {
        let cli = Cli::try_parse_from(["tvmcodec", "decode-tx", "--id", "ab12"]).unwrap();
        match cli.command {
            Commands::DecodeTx { id, what, timeout_ms, .. } => {
                assert_eq!(id, "ab12");
                assert_eq!(what, TxPart::Input);
                assert_eq!(timeout_ms, 15_000);
            }
            _ => panic!("expected decode-tx"),
        }
    }

    #[test]
    fn log_components_are_collected() {
        let cli = Cli::try_parse_from([
            "tvmcodec",
            "--log-component",
            "tvmcodec-rpc=debug",
            "selector",
            "transfer(address,uint256)",
            "--log-component",
            "tvmcodec_abi=trace",
        ])
        .unwrap();
        assert_eq!(
            cli.log_components,
            vec![
                ("tvmcodec-rpc".to_string(), "debug".to_string()),
                ("tvmcodec_abi".to_string(), "trace".to_string()),
            ]
        );
        assert!(Cli::try_parse_from(["tvmcodec", "--log-component", "nolevel", "selector", "f()"]).is_err());
    }

    #[test]
    fn abi_string_flag_selects_strategy() {
        assert_eq!(revert_config(true).strategy, RevertStrategy::AbiString);
        assert_eq!(revert_config(false).strategy, RevertStrategy::TrailingWord);
    }
}
