// SPDX-License-Identifier: MIT OR Apache-2.0
//! Deterministic key partitioning for the reduce phase.

/// Split `keys` into exactly `n` contiguous, near-equal chunks (some possibly
/// empty), sorted first so the partitioning is deterministic across runs and
/// across mappers.
///
/// Mirrors `keys[i*l:(i+1)*l]` from the original driver, with the last chunk
/// absorbing any remainder. Always returns exactly `n` chunks so that the
/// caller can dispatch exactly `n` reducer invocations; `n == 0` yields no
/// chunks.
pub fn split_keys(keys: &[String], n: usize) -> Vec<Vec<String>> {
    if n == 0 {
        return Vec::new();
    }
    let mut sorted = keys.to_vec();
    sorted.sort();
    sorted.dedup();

    let total = sorted.len();
    let chunk_len = total / n;
    let mut chunks = Vec::with_capacity(n);
    for i in 0..n {
        let start = (i * chunk_len).min(total);
        let end = if i == n - 1 { total } else { (start + chunk_len).min(total) };
        chunks.push(sorted[start..end].to_vec());
    }
    chunks
}
