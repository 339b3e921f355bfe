// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
//! Wire types for the `MapBatch`/`ReduceBatch` RPC surface.
//!
//! These types cross the driver/worker boundary as JSON request/response
//! bodies. They carry no behavior of their own beyond (de)serialization and
//! the [`ResourceBackend`] string/numeric mapping, which must stay stable
//! across independently deployed drivers and workers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single key/value pair produced by a mapper or consumed/produced by a
/// reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    #[serde(rename = "K")]
    pub key: String,
    #[serde(rename = "V")]
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Storage backend tag for a [`Resource`] or [`ResourceHint`].
///
/// Numeric discriminants are part of the wire contract and must not be
/// renumbered once deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ResourceBackend {
    File = 0,
    S3 = 1,
    Xdt = 2,
}

impl ResourceBackend {
    /// All known backends, in discriminant order.
    pub const ALL: [ResourceBackend; 3] = [Self::File, Self::S3, Self::Xdt];

    /// Construct a backend from its numeric wire value, if known.
    pub fn from_i32(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|b| *b as i32 == value)
    }
}

impl fmt::Display for ResourceBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::File => "FILE",
            Self::S3 => "S3",
            Self::Xdt => "XDT",
        };
        f.write_str(s)
    }
}

/// Error returned when a backend name does not match any known [`ResourceBackend`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown backend: {0}")]
pub struct UnknownBackendName(pub String);

impl FromStr for ResourceBackend {
    type Err = UnknownBackendName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FILE" => Ok(Self::File),
            "S3" => Ok(Self::S3),
            "XDT" => Ok(Self::Xdt),
            other => Err(UnknownBackendName(other.to_string())),
        }
    }
}

/// A handle identifying a concrete stored payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub backend: ResourceBackend,
    pub locator: String,
}

impl Resource {
    pub fn new(backend: ResourceBackend, locator: impl Into<String>) -> Self {
        Self {
            backend,
            locator: locator.into(),
        }
    }
}

/// A placement directive for a future `Put`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceHint {
    pub backend: ResourceBackend,
    pub hint: String,
}

impl ResourceHint {
    pub fn new(backend: ResourceBackend, hint: impl Into<String>) -> Self {
        Self {
            backend,
            hint: hint.into(),
        }
    }
}

/// Request body for `POST /map-batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBatchRequest {
    pub input: Resource,
    pub output_hint: ResourceHint,
}

/// Response body for `POST /map-batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBatchResponse {
    pub output: Resource,
    /// Distinct keys present in `output`. Order is unspecified.
    pub keys: Vec<String>,
}

/// Request body for `POST /reduce-batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceBatchRequest {
    /// The subset of keys this reducer invocation is responsible for.
    pub keys: Vec<String>,
    /// All mapper outputs; the reducer filters down to `keys`.
    pub inputs: Vec<Resource>,
    pub output_hint: ResourceHint,
}

/// Response body for `POST /reduce-batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceBatchResponse {
    pub output: Resource,
}
