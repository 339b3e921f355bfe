// SPDX-License-Identifier: MIT OR Apache-2.0
//! The user-supplied capability pair, consumed by the worker's RPC handlers.

use mare_core::OpContext;
use mare_proto::Pair;

/// Transforms one input pair into zero or more output pairs.
///
/// Implementations are invoked sequentially within a single `MapBatch`
/// request but must tolerate concurrent invocation across requests: the
/// worker shares one instance across every in-flight RPC.
pub trait Mapper: Send + Sync + 'static {
    fn map_one(&self, ctx: &OpContext, input: &Pair) -> Result<Vec<Pair>, String>;
}

/// Folds the values sharing one key into zero or more output pairs.
pub trait Reducer: Send + Sync + 'static {
    fn reduce_one(&self, ctx: &OpContext, key: &str, values: &[String]) -> Result<Vec<Pair>, String>;
}

/// Splits ASCII-lowercased text on non-alphanumeric runs and emits `(word, "")`
/// per token, ignoring the input pair's key.
pub struct WordCountMapper;

impl Mapper for WordCountMapper {
    fn map_one(&self, _ctx: &OpContext, input: &Pair) -> Result<Vec<Pair>, String> {
        Ok(input
            .value
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(|w| Pair::new(w, ""))
            .collect())
    }
}

/// Emits `(word, count)` where `count` is the number of values seen for that word.
pub struct WordCountReducer;

impl Reducer for WordCountReducer {
    fn reduce_one(&self, _ctx: &OpContext, key: &str, values: &[String]) -> Result<Vec<Pair>, String> {
        Ok(vec![Pair::new(key, values.len().to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_mapper_splits_and_lowercases() {
        let ctx = OpContext::new();
        let out = WordCountMapper
            .map_one(&ctx, &Pair::new("line-1", "The Quick, Brown fox!"))
            .unwrap();
        assert_eq!(
            out,
            vec![
                Pair::new("the", ""),
                Pair::new("quick", ""),
                Pair::new("brown", ""),
                Pair::new("fox", ""),
            ]
        );
    }

    #[test]
    fn word_count_mapper_skips_empty_tokens() {
        let ctx = OpContext::new();
        let out = WordCountMapper.map_one(&ctx, &Pair::new("", "  ")).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn word_count_reducer_counts_values() {
        let ctx = OpContext::new();
        let out = WordCountReducer
            .reduce_one(&ctx, "the", &["".to_string(), "".to_string()])
            .unwrap();
        assert_eq!(out, vec![Pair::new("the", "2")]);
    }

    #[test]
    fn word_count_reducer_handles_absent_key() {
        let ctx = OpContext::new();
        let out = WordCountReducer.reduce_one(&ctx, "ghost", &[]).unwrap();
        assert_eq!(out, vec![Pair::new("ghost", "0")]);
    }
}
