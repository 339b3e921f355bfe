// SPDX-License-Identifier: MIT OR Apache-2.0
//! XDT (direct-transfer channel) backend. Reserved for future integration;
//! every operation surfaces an unambiguous unsupported-backend error rather
//! than silently succeeding.

use crate::context::OpContext;
use crate::error::BackendError;

pub async fn get(_ctx: &OpContext, _locator: &str) -> Result<String, BackendError> {
    Err(BackendError::Unsupported("XDT"))
}

pub async fn put(
    _ctx: &OpContext,
    _hint: &str,
    _data: &str,
) -> Result<mare_proto::Resource, BackendError> {
    Err(BackendError::Unsupported("XDT"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_is_unsupported() {
        let ctx = OpContext::new();
        assert!(matches!(
            get(&ctx, "anything").await,
            Err(BackendError::Unsupported("XDT"))
        ));
    }

    #[tokio::test]
    async fn put_is_unsupported() {
        let ctx = OpContext::new();
        assert!(matches!(
            put(&ctx, "anything", "data").await,
            Err(BackendError::Unsupported("XDT"))
        ));
    }
}
