// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
//! Driver coordination: reqwest RPC client, map/reduce phase fan-out/fan-in,
//! deterministic key partitioning.

mod client;
mod error;
mod phases;

pub use client::WorkerClient;
pub use error::DriverError;
pub use phases::{map_phase, reduce_phase};

use mare_core::{Codec, OpContext};
use mare_proto::{Resource, ResourceBackend, ResourceHint};

/// Run a full job: map phase over `inputs`, then reduce phase into
/// `n_reducers` shards, publishing the final output under `output_hint`.
pub async fn run_job(
    client: &WorkerClient,
    ctx: &OpContext,
    inputs: &[String],
    input_backend: ResourceBackend,
    inter_hint: &ResourceHint,
    n_reducers: usize,
    output_hint: &ResourceHint,
    codec: Codec,
) -> Result<Resource, DriverError> {
    if n_reducers == 0 {
        return Err(DriverError::InvalidNReducers(0));
    }

    let (keys, intermediates) =
        map_phase(client, ctx, inputs, input_backend, inter_hint).await?;

    reduce_phase(
        client,
        ctx,
        keys.into_iter().collect(),
        intermediates,
        n_reducers,
        output_hint,
        codec,
    )
    .await
}
