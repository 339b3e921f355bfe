// SPDX-License-Identifier: MIT OR Apache-2.0
//! FILE backend: Get reads a whole file into memory; Put creates a uniquely
//! named temp file under a hint directory. Nothing is ever deleted by the
//! framework.

use crate::context::OpContext;
use crate::error::BackendError;
use crate::util::idgen::random_suffix;
use mare_proto::{Resource, ResourceBackend};
use std::path::Path;

pub async fn get(ctx: &OpContext, locator: &str) -> Result<String, BackendError> {
    ctx.run(async {
        tokio::fs::read_to_string(locator)
            .await
            .map_err(BackendError::GetIo)
    })
    .await
}

/// Create `<hint>/mare-<8 random chars>.tsv`, write `data`, and return the
/// resulting [`Resource`]. The file is left on disk.
pub async fn put(ctx: &OpContext, hint: &str, data: &str) -> Result<Resource, BackendError> {
    ctx.run(async {
        let name = format!("mare-{}.tsv", random_suffix(8));
        let path = Path::new(hint).join(name);
        tokio::fs::write(&path, data)
            .await
            .map_err(BackendError::PutIo)?;
        Ok(Resource::new(
            ResourceBackend::File,
            path.to_string_lossy().into_owned(),
        ))
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let ctx = OpContext::new();
        let dir = tempfile::tempdir().unwrap();
        let resource = put(&ctx, dir.path().to_str().unwrap(), "a\t1\n").await.unwrap();
        assert!(resource.locator.ends_with(".tsv"));
        assert_eq!(get(&ctx, &resource.locator).await.unwrap(), "a\t1\n");
    }

    #[tokio::test]
    async fn get_missing_file_wraps_io_error() {
        let ctx = OpContext::new();
        let err = get(&ctx, "/nonexistent/mare-xxxxxxxx.tsv").await.unwrap_err();
        assert!(matches!(err, BackendError::GetIo(_)));
    }

    #[tokio::test]
    async fn cancelled_context_aborts_get() {
        let ctx = OpContext::new();
        ctx.cancel();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mare-preexisting.tsv");
        tokio::fs::write(&path, "data").await.unwrap();
        let err = get(&ctx, path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, BackendError::Cancelled));
    }
}
