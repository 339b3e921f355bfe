// SPDX-License-Identifier: MIT OR Apache-2.0
//! S3-compatible backend. Credentials and region come from the ambient
//! environment via `aws-config`; locators/hints are `s3://bucket/key(-prefix)`
//! URIs.

use crate::context::OpContext;
use crate::error::BackendError;
use crate::util::idgen::random_suffix;
use aws_sdk_s3::primitives::ByteStream;
use mare_proto::{Resource, ResourceBackend};

/// Parsed `s3://bucket/key` components.
struct S3Uri {
    bucket: String,
    key: String,
}

fn parse_s3_uri(uri: &str, backend: &'static str) -> Result<S3Uri, BackendError> {
    let rest = uri
        .strip_prefix("s3://")
        .ok_or_else(|| BackendError::InvalidLocator {
            backend,
            detail: format!("missing s3:// scheme in {uri:?}"),
        })?;
    let (bucket, path) = rest.split_once('/').ok_or_else(|| BackendError::InvalidLocator {
        backend,
        detail: format!("missing bucket/key separator in {uri:?}"),
    })?;
    // A single leading '/' in the path component is stripped, per spec.
    let key = path.strip_prefix('/').unwrap_or(path);
    Ok(S3Uri {
        bucket: bucket.to_string(),
        key: key.to_string(),
    })
}

async fn client() -> aws_sdk_s3::Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    aws_sdk_s3::Client::new(&config)
}

pub async fn get(ctx: &OpContext, locator: &str) -> Result<String, BackendError> {
    let uri = parse_s3_uri(locator, "S3")?;
    ctx.run(async {
        let client = client().await;
        let output = client
            .get_object()
            .bucket(&uri.bucket)
            .key(&uri.key)
            .send()
            .await
            .map_err(|e| BackendError::GetS3(e.to_string()))?;
        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| BackendError::GetS3(e.to_string()))?;
        String::from_utf8(bytes.into_bytes().to_vec())
            .map_err(|e| BackendError::GetS3(format!("non-utf8 payload: {e}")))
    })
    .await
}

pub async fn put(ctx: &OpContext, hint: &str, data: &str) -> Result<Resource, BackendError> {
    let uri = parse_s3_uri(hint, "S3")?;
    ctx.run(async {
        let key = format!("{}/mare-{}.tsv", uri.key.trim_end_matches('/'), random_suffix(8));
        let client = client().await;
        client
            .put_object()
            .bucket(&uri.bucket)
            .key(&key)
            .body(ByteStream::from(data.as_bytes().to_vec()))
            .send()
            .await
            .map_err(|e| BackendError::PutS3(e.to_string()))?;
        Ok(Resource::new(
            ResourceBackend::S3,
            format!("s3://{}/{}", uri.bucket, key),
        ))
    })
    .await
}
