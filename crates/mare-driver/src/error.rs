// SPDX-License-Identifier: MIT OR Apache-2.0
//! Driver-side error taxonomy. Any variant is fatal: the driver logs and
//! exits non-zero, with no partial output and no retry.

use mare_core::context::Cancelled;
use mare_core::{BackendError, CodecError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("map phase failed: {0}")]
    MapFailed(#[source] Box<DriverError>),

    #[error("reduce phase failed: {0}")]
    ReduceFailed(#[source] Box<DriverError>),

    #[error("worker RPC failed: {0}")]
    Rpc(#[from] reqwest::Error),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("n_reducers must be >= 1, got {0}")]
    InvalidNReducers(usize),

    #[error("operation cancelled")]
    Cancelled,
}

impl From<Cancelled> for DriverError {
    fn from(_: Cancelled) -> Self {
        DriverError::Cancelled
    }
}
