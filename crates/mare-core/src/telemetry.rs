// SPDX-License-Identifier: MIT OR Apache-2.0
//! Span-naming convention shared by the backend, worker, and driver crates:
//! `<area>.<operation>`, e.g. `backend.get`, `worker.map_batch`.

use tracing::Span;

/// Build a span for `name`, following the `area.operation` convention used
/// across the coordination core.
pub fn make_span(name: &'static str) -> Span {
    tracing::info_span!("mare", op = name)
}
