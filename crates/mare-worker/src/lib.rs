// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
//! Axum HTTP service implementing the `MapBatch`/`ReduceBatch` RPC surface.

mod error;
mod handlers;
mod mapper;

pub use error::WorkerError;
pub use mapper::{Mapper, Reducer, WordCountMapper, WordCountReducer};

use axum::routing::{get, post};
use axum::{Json, Router};
use mare_core::Codec;
use mare_proto::ResourceBackend;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared, immutable state visible to every in-flight RPC.
///
/// `mapper`/`reducer` must be `Send + Sync + 'static`: the worker holds no
/// cross-request state of its own and shares this one instance via `Arc`
/// across every concurrently handled request.
pub struct AppState {
    pub mapper: Box<dyn Mapper>,
    pub reducer: Box<dyn Reducer>,
    pub codec: Codec,
}

impl AppState {
    pub fn new(mapper: impl Mapper, reducer: impl Reducer, codec: Codec) -> Self {
        Self {
            mapper: Box::new(mapper),
            reducer: Box::new(reducer),
            codec,
        }
    }
}

/// Build the router. Callers are responsible for binding a listener and
/// driving `axum::serve`.
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/backends-info", get(backends_info))
        .route("/map-batch", post(handlers::map_batch))
        .route("/reduce-batch", post(handlers::reduce_batch))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn backends_info(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
) -> Json<serde_json::Value> {
    Json(json!({
        "codec": match state.codec {
            Codec::TabLine => "tabline",
            Codec::Json => "json",
        },
        "backends": ResourceBackend::ALL.iter().map(|b| b.to_string()).collect::<Vec<_>>(),
    }))
}
