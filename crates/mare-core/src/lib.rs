// SPDX-License-Identifier: MIT OR Apache-2.0
//! Resource backends, pair codec, cancellation context, and error taxonomy
//! shared by the `mare-worker` and `mare-driver` binaries.

pub mod backend;
pub mod codec;
pub mod context;
pub mod error;
pub mod telemetry;
pub mod util;

pub use backend::{ResourceExt, ResourceHintExt};
pub use codec::Codec;
pub use context::OpContext;
pub use error::{BackendError, CodecError};
