// SPDX-License-Identifier: MIT OR Apache-2.0
//! Backend dispatch: `Resource::get`/`ResourceHint::put`, routed by the
//! `backend` tag to the FILE, S3, or XDT implementation.

mod file;
mod s3;
mod xdt;

use crate::context::OpContext;
use crate::error::BackendError;
use crate::telemetry::make_span;
use async_trait::async_trait;
use mare_proto::{Resource, ResourceBackend, ResourceHint};
use tracing::Instrument;

/// Extension trait adding the Get operation to [`Resource`].
#[async_trait]
pub trait ResourceExt {
    /// Retrieve the full payload this resource identifies.
    async fn get(&self, ctx: &OpContext) -> Result<String, BackendError>;
}

/// Extension trait adding the Put operation to [`ResourceHint`].
#[async_trait]
pub trait ResourceHintExt {
    /// Store `data` under this hint, returning the resulting [`Resource`].
    async fn put(&self, ctx: &OpContext, data: &str) -> Result<Resource, BackendError>;
}

#[async_trait]
impl ResourceExt for Resource {
    async fn get(&self, ctx: &OpContext) -> Result<String, BackendError> {
        let span = make_span("backend.get");
        async move {
            match self.backend {
                ResourceBackend::File => file::get(ctx, &self.locator).await,
                ResourceBackend::S3 => s3::get(ctx, &self.locator).await,
                ResourceBackend::Xdt => xdt::get(ctx, &self.locator).await,
            }
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl ResourceHintExt for ResourceHint {
    async fn put(&self, ctx: &OpContext, data: &str) -> Result<Resource, BackendError> {
        let span = make_span("backend.put");
        async move {
            match self.backend {
                ResourceBackend::File => file::put(ctx, &self.hint, data).await,
                ResourceBackend::S3 => s3::put(ctx, &self.hint, data).await,
                ResourceBackend::Xdt => xdt::put(ctx, &self.hint, data).await,
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_resource_round_trips_through_extension_trait() {
        let ctx = OpContext::new();
        let dir = tempfile::tempdir().unwrap();
        let hint = ResourceHint::new(ResourceBackend::File, dir.path().to_str().unwrap());
        let resource = hint.put(&ctx, "k\tv\n").await.unwrap();
        assert_eq!(resource.get(&ctx).await.unwrap(), "k\tv\n");
    }

    #[tokio::test]
    async fn xdt_resource_is_unsupported() {
        let ctx = OpContext::new();
        let resource = Resource::new(ResourceBackend::Xdt, "whatever");
        assert!(matches!(
            resource.get(&ctx).await,
            Err(BackendError::Unsupported("XDT"))
        ));
    }
}
