// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
use anyhow::{Context, Result};
use mare_core::Codec;
use mare_worker::{build_app, AppState, WordCountMapper, WordCountReducer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mare=info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(80);

    let codec = match std::env::var("MARE_CODEC").as_deref() {
        Ok("json") => Codec::Json,
        Ok("tabline") | Err(_) => Codec::TabLine,
        Ok(other) => {
            anyhow::bail!("unrecognized MARE_CODEC: {other}");
        }
    };

    if let Ok(endpoint) = std::env::var("MARE_TRACING_ENDPOINT") {
        info!(endpoint = %endpoint, "tracing endpoint configured (logged only)");
    }

    let state = Arc::new(AppState::new(WordCountMapper, WordCountReducer, codec));
    let app = build_app(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(%addr, "mare-worker listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve")
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
