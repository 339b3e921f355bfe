// SPDX-License-Identifier: MIT OR Apache-2.0
//! `MapBatch`/`ReduceBatch` axum handlers.

use crate::error::WorkerError;
use crate::mapper::{Mapper, Reducer};
use crate::AppState;
use axum::extract::State;
use axum::Json;
use futures::future::try_join_all;
use mare_core::{OpContext, ResourceExt, ResourceHintExt};
use mare_proto::{MapBatchRequest, MapBatchResponse, ReduceBatchRequest, ReduceBatchResponse};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::Instrument;

pub async fn map_batch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MapBatchRequest>,
) -> Result<Json<MapBatchResponse>, WorkerError> {
    let ctx = OpContext::new();

    let raw = req
        .input
        .get(&ctx)
        .instrument(tracing::info_span!("worker: map.get"))
        .await?;

    let inputs = {
        let _span = tracing::info_span!("worker: map.decode").entered();
        state.codec.decode(&raw)?
    };

    let mut emitted = Vec::new();
    let mut keys = BTreeSet::new();
    {
        let _span = tracing::info_span!("worker: map.apply").entered();
        for pair in &inputs {
            for p in state.mapper.map_one(&ctx, pair).map_err(WorkerError::Mapper)? {
                keys.insert(p.key.clone());
                emitted.push(p);
            }
        }
    }

    let output = {
        let encoded = state.codec.encode(&emitted)?;
        req.output_hint
            .put(&ctx, &encoded)
            .instrument(tracing::info_span!("worker: map.put"))
            .await?
    };

    Ok(Json(MapBatchResponse {
        output,
        keys: keys.into_iter().collect(),
    }))
}

pub async fn reduce_batch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReduceBatchRequest>,
) -> Result<Json<ReduceBatchResponse>, WorkerError> {
    let ctx = OpContext::new();

    let payloads = try_join_all(req.inputs.iter().map(|resource| resource.get(&ctx)))
        .instrument(tracing::info_span!("worker: reduce.get"))
        .await?;

    let mut merged: BTreeMap<String, Vec<String>> = BTreeMap::new();
    {
        let _span = tracing::info_span!("worker: reduce.merge").entered();
        for payload in &payloads {
            for pair in state.codec.decode(payload)? {
                merged.entry(pair.key).or_default().push(pair.value);
            }
        }
    }

    let mut emitted = Vec::new();
    {
        let _span = tracing::info_span!("worker: reduce.reduce").entered();
        for key in &req.keys {
            let values = merged.remove(key).unwrap_or_default();
            let out = state
                .reducer
                .reduce_one(&ctx, key, &values)
                .map_err(WorkerError::Reducer)?;
            emitted.extend(out);
        }
    }

    let output = {
        let encoded = state.codec.encode(&emitted)?;
        req.output_hint
            .put(&ctx, &encoded)
            .instrument(tracing::info_span!("worker: reduce.put"))
            .await?
    };

    Ok(Json(ReduceBatchResponse { output }))
}
