//! Grouped aggregations over the index edges and the token stream.
//!
//! Both aggregates are pure folds over their group's records, so partial
//! re-execution of a partition cannot double-count.

use ahash::AHashMap;

use crate::record::{AuthorToken, IndexEdge, PairCommonCount};

/// Count distinct shared tokens per ordered author pair and drop pairs
/// below `min_common_tokens`.
///
/// Edges arrive one per (pair, token) because the token stream is
/// set-deduplicated upstream, so a plain row count is a distinct count.
/// The threshold suppresses noise pairs sharing only a couple of
/// incidental tokens, which dominate the edge volume.
pub fn count_common(edges: &[IndexEdge], min_common_tokens: u64) -> Vec<PairCommonCount> {
    let mut counts: AHashMap<(&str, &str), u64> = AHashMap::new();
    for edge in edges {
        *counts
            .entry((edge.author_1.as_str(), edge.author_2.as_str()))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .filter(|&(_, common)| common >= min_common_tokens)
        .map(|((author_1, author_2), common)| PairCommonCount {
            author_1: author_1.to_string(),
            author_2: author_2.to_string(),
            common,
        })
        .collect()
}

/// Count total distinct retained tokens per author: the binary-vector
/// length used by the similarity coefficient.
pub fn vocab_sizes(author_tokens: &[AuthorToken]) -> AHashMap<String, u64> {
    let mut sizes: AHashMap<String, u64> = AHashMap::new();
    for at in author_tokens {
        *sizes.entry(at.author_id.clone()).or_insert(0) += 1;
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a1: &str, a2: &str, token: &str) -> IndexEdge {
        IndexEdge {
            author_1: a1.to_string(),
            author_2: a2.to_string(),
            token: token.to_string(),
        }
    }

    #[test]
    fn counts_shared_tokens_per_pair() {
        let edges = vec![
            edge("u2", "u1", "cat"),
            edge("u2", "u1", "sat"),
            edge("u3", "u1", "cat"),
        ];
        let mut pairs = count_common(&edges, 1);
        pairs.sort_by(|a, b| (&a.author_1, &a.author_2).cmp(&(&b.author_1, &b.author_2)));

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].common, 2);
        assert_eq!(pairs[1].common, 1);
    }

    #[test]
    fn threshold_drops_weak_pairs() {
        let edges = vec![
            edge("u2", "u1", "cat"),
            edge("u2", "u1", "sat"),
            edge("u3", "u1", "cat"),
        ];
        let pairs = count_common(&edges, 2);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].author_1, "u2");
        assert_eq!(pairs[0].common, 2);
    }

    #[test]
    fn vocab_size_counts_distinct_tokens() {
        let tokens = vec![
            AuthorToken {
                author_id: "u1".to_string(),
                token: "cat".to_string(),
            },
            AuthorToken {
                author_id: "u1".to_string(),
                token: "sat".to_string(),
            },
            AuthorToken {
                author_id: "u2".to_string(),
                token: "cat".to_string(),
            },
        ];
        let sizes = vocab_sizes(&tokens);
        assert_eq!(sizes["u1"], 2);
        assert_eq!(sizes["u2"], 1);
    }
}
