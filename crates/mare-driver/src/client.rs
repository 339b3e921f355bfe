// SPDX-License-Identifier: MIT OR Apache-2.0
//! Thin reqwest wrapper around the worker's `MapBatch`/`ReduceBatch` RPCs.
//!
//! One `reqwest::Client` is built per driver process and shared across every
//! concurrent task; connection pooling is reqwest's own responsibility.

use crate::error::DriverError;
use mare_proto::{MapBatchRequest, MapBatchResponse, ReduceBatchRequest, ReduceBatchResponse};

#[derive(Clone)]
pub struct WorkerClient {
    http: reqwest::Client,
    base_url: String,
}

impl WorkerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn map_batch(&self, req: &MapBatchRequest) -> Result<MapBatchResponse, DriverError> {
        let resp = self
            .http
            .post(format!("{}/map-batch", self.base_url))
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    pub async fn reduce_batch(
        &self,
        req: &ReduceBatchRequest,
    ) -> Result<ReduceBatchResponse, DriverError> {
        let resp = self
            .http
            .post(format!("{}/reduce-batch", self.base_url))
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }
}
