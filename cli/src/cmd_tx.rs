//! `tvmcodec decode-tx`: fetch a transaction by id and decode one part of it.

use anyhow::{Context, Result};
use clap::ValueEnum;
use tvmcodec_abi::RevertConfig;
use tvmcodec_rpc::{HttpSource, SourceConfig, TxDecoder};

use crate::{emit, print_call, print_output, print_revert};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TxPart {
    /// Call data against the contract ABI
    Input,
    /// Return data, or the node's failure message
    Output,
    /// Revert reason keyed off the execution status
    Revert,
}

pub async fn run(
    tx_id: &str,
    what: TxPart,
    source: SourceConfig,
    revert: RevertConfig,
    as_json: bool,
) -> Result<()> {
    let endpoint = source.endpoint.clone();
    let source = HttpSource::new(source).context("build HTTP client")?;
    let decoder = TxDecoder::new(source).with_revert_config(revert);

    let context = || format!("decode {:?} of {} via {}", what, tx_id, endpoint);
    match what {
        TxPart::Input => {
            let call = decoder.decode_input_by_id(tx_id).await.with_context(context)?;
            emit(&call, as_json, print_call)
        }
        TxPart::Output => {
            let output = decoder.decode_output_by_id(tx_id).await.with_context(context)?;
            emit(&output, as_json, print_output)
        }
        TxPart::Revert => {
            let revert = decoder.decode_revert_by_id(tx_id).await.with_context(context)?;
            emit(&revert, as_json, print_revert)
        }
    }
}
