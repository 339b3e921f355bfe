// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error taxonomy for resource backend access and the pair codec.

use crate::context::Cancelled;
use thiserror::Error;

/// Errors raised by [`crate::backend`] Get/Put operations.
///
/// Display messages follow the "failed to get"/"failed to put" wrapping
/// convention: the cause is always preserved via `#[source]`.
#[derive(Debug, Error)]
pub enum BackendError {
    /// A FILE-backend Get/Put failed at the filesystem layer.
    #[error("failed to get: {0}")]
    GetIo(#[source] std::io::Error),

    /// A FILE-backend Put failed while writing the payload.
    #[error("failed to put: {0}")]
    PutIo(#[source] std::io::Error),

    /// An S3 Get/Put failed at the SDK layer.
    #[error("failed to get: {0}")]
    GetS3(String),

    /// An S3 Put failed at the SDK layer.
    #[error("failed to put: {0}")]
    PutS3(String),

    /// A resource locator or hint could not be parsed for its backend.
    #[error("invalid {backend} locator: {detail}")]
    InvalidLocator {
        backend: &'static str,
        detail: String,
    },

    /// The XDT backend (or any other unimplemented backend) was used.
    #[error("unsupported backend: {0}")]
    Unsupported(&'static str),

    /// The wire value did not correspond to any known [`mare_proto::ResourceBackend`].
    #[error("unknown backend: {0}")]
    UnknownBackend(i32),

    /// A Get/Put was cancelled before it could complete.
    #[error("operation cancelled")]
    Cancelled,
}

impl From<Cancelled> for BackendError {
    fn from(_: Cancelled) -> Self {
        BackendError::Cancelled
    }
}

/// Errors raised by the pair codec (`mare_core::codec`).
#[derive(Debug, Error)]
pub enum CodecError {
    /// The JSON form could not be parsed.
    #[error("failed to decode pairs: {0}")]
    Json(#[from] serde_json::Error),
}
