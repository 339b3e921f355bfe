// SPDX-License-Identifier: MIT OR Apache-2.0
//! Map and reduce phase coordination: fan out one task per input/shard,
//! collect responses through a single-consumer channel in arrival order.

use crate::client::WorkerClient;
use crate::error::DriverError;
use mare_core::util::keys::split_keys;
use mare_core::{Codec, OpContext, ResourceExt, ResourceHintExt};
use mare_proto::{MapBatchRequest, ReduceBatchRequest, Resource, ResourceBackend, ResourceHint};
use std::collections::BTreeSet;
use tokio::sync::mpsc;
use tracing::instrument;

/// Dispatch one `MapBatch` RPC per input locator, concurrently and with no
/// bound on parallelism. Returns the deduplicated key union and the mapper
/// outputs in arrival order.
#[instrument(name = "driver: map.invokeAllMappers", skip(client, ctx))]
pub async fn map_phase(
    client: &WorkerClient,
    ctx: &OpContext,
    inputs: &[String],
    input_backend: ResourceBackend,
    inter_hint: &ResourceHint,
) -> Result<(BTreeSet<String>, Vec<Resource>), DriverError> {
    let (tx, mut rx) = mpsc::channel(inputs.len().max(1));

    for locator in inputs {
        let client = client.clone();
        let ctx = ctx.child();
        let tx = tx.clone();
        let req = MapBatchRequest {
            input: Resource::new(input_backend, locator.clone()),
            output_hint: inter_hint.clone(),
        };
        tokio::spawn(async move {
            let result = ctx.run(async { client.map_batch(&req).await }).await;
            let _ = tx.send(result).await;
        });
    }
    drop(tx);

    let mut keys = BTreeSet::new();
    let mut outputs = Vec::with_capacity(inputs.len());
    while let Some(result) = rx.recv().await {
        match result {
            Ok(resp) => {
                keys.extend(resp.keys);
                outputs.push(resp.output);
            }
            Err(err) => {
                ctx.cancel();
                return Err(DriverError::MapFailed(Box::new(err)));
            }
        }
    }

    Ok((keys, outputs))
}

/// Partition `keys` into `n` shards, dispatch one `ReduceBatch` RPC per
/// shard concurrently (each carrying the full intermediate list), then
/// fetch, decode, and concatenate the reducer outputs in arrival order.
#[instrument(name = "driver: reduce.invokeAllReducers", skip(client, ctx, intermediates))]
pub async fn reduce_phase(
    client: &WorkerClient,
    ctx: &OpContext,
    keys: Vec<String>,
    intermediates: Vec<Resource>,
    n_reducers: usize,
    output_hint: &ResourceHint,
    codec: Codec,
) -> Result<Resource, DriverError> {
    if n_reducers == 0 {
        return Err(DriverError::InvalidNReducers(0));
    }

    let shards = split_keys(&keys, n_reducers);
    debug_assert_eq!(shards.len(), n_reducers, "split_keys must yield exactly n_reducers shards");
    let (tx, mut rx) = mpsc::channel(n_reducers.max(1));

    for shard in shards {
        let client = client.clone();
        let ctx = ctx.child();
        let tx = tx.clone();
        let req = ReduceBatchRequest {
            keys: shard,
            inputs: intermediates.clone(),
            output_hint: output_hint.clone(),
        };
        tokio::spawn(async move {
            let result = ctx.run(async { client.reduce_batch(&req).await }).await;
            let _ = tx.send(result).await;
        });
    }
    drop(tx);

    let mut pairs = Vec::new();
    while let Some(result) = rx.recv().await {
        match result {
            Ok(resp) => {
                let payload = resp.output.get(ctx).await.map_err(DriverError::Backend)?;
                pairs.extend(codec.decode(&payload)?);
            }
            Err(err) => {
                ctx.cancel();
                return Err(DriverError::ReduceFailed(Box::new(err)));
            }
        }
    }

    let encoded = codec.encode(&pairs)?;
    output_hint.put(ctx, &encoded).await.map_err(DriverError::Backend)
}
