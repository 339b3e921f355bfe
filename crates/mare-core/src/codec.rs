// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pair codec: two interchangeable wire representations for sequences of
//! [`Pair`]s, chosen per deployment and never auto-detected.

use crate::error::CodecError;
use mare_proto::Pair;
use serde::{Deserialize, Serialize};

/// Which wire representation a worker/driver pair is configured to use.
///
/// Deployments pick one; both peers must agree (spec: "a choice, not an
/// ambiguity").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Codec {
    /// Tab-separated `key\tvalue\n` lines. Canonical cross-worker form.
    #[default]
    TabLine,
    /// A JSON array of `{"K": key, "V": value}` objects.
    Json,
}

impl Codec {
    /// Serialize `pairs` using this codec.
    pub fn encode(self, pairs: &[Pair]) -> Result<String, CodecError> {
        match self {
            Codec::TabLine => Ok(encode_tabline(pairs)),
            Codec::Json => encode_json(pairs),
        }
    }

    /// Deserialize `data` using this codec.
    pub fn decode(self, data: &str) -> Result<Vec<Pair>, CodecError> {
        match self {
            Codec::TabLine => Ok(decode_tabline(data)),
            Codec::Json => decode_json(data),
        }
    }
}

/// Encode pairs as `key\tvalue\n` lines.
///
/// Lossy for keys/values containing `\t` or `\n`; callers are responsible
/// for choosing the JSON form when that matters.
pub fn encode_tabline(pairs: &[Pair]) -> String {
    let mut out = String::new();
    for pair in pairs {
        out.push_str(&pair.key);
        out.push('\t');
        out.push_str(&pair.value);
        out.push('\n');
    }
    out
}

/// Decode `key\tvalue\n` lines.
///
/// Empty lines are skipped. A line with no tab yields `(key="", value=<line>)`.
/// This never fails: any input is accepted.
pub fn decode_tabline(data: &str) -> Vec<Pair> {
    let mut pairs = Vec::new();
    for line in data.split('\n') {
        if line.is_empty() {
            continue;
        }
        match line.split_once('\t') {
            Some((key, value)) => pairs.push(Pair::new(key, value)),
            None => pairs.push(Pair::new("", line)),
        }
    }
    pairs
}

#[derive(Serialize, Deserialize)]
struct WireJsonPair {
    #[serde(rename = "K")]
    key: String,
    #[serde(rename = "V")]
    value: String,
}

/// Encode pairs as an indented JSON array of `{"K": .., "V": ..}` objects.
pub fn encode_json(pairs: &[Pair]) -> Result<String, CodecError> {
    let wire: Vec<WireJsonPair> = pairs
        .iter()
        .map(|p| WireJsonPair {
            key: p.key.clone(),
            value: p.value.clone(),
        })
        .collect();
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(&wire, &mut ser)?;
    Ok(String::from_utf8(buf).expect("serde_json always produces valid UTF-8"))
}

/// Decode an indented JSON array of `{"K": .., "V": ..}` objects.
///
/// A malformed payload is a hard decode failure (unlike the tab-line form).
pub fn decode_json(data: &str) -> Result<Vec<Pair>, CodecError> {
    let wire: Vec<WireJsonPair> = serde_json::from_str(data)?;
    Ok(wire
        .into_iter()
        .map(|w| Pair::new(w.key, w.value))
        .collect())
}
