// SPDX-License-Identifier: MIT OR Apache-2.0
//! Worker-side error taxonomy, surfaced to the driver as HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mare_core::{BackendError, CodecError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("mapper error: {0}")]
    Mapper(String),

    #[error("reducer error: {0}")]
    Reducer(String),
}

impl IntoResponse for WorkerError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
