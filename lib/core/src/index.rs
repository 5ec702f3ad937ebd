//! Inverted-index pair generation.
//!
//! Groups (author, token) pairs by token into posting lists, then
//! self-joins each list to emit every ordered author pair sharing that
//! token. Pairing happens entirely inside one token's group, so cost is
//! bounded by the sum of squared posting-list sizes instead of the square
//! of the author count, and each group can be processed independently.

use std::cmp::Ordering;

use ahash::AHashMap;
use rayon::prelude::*;

use crate::record::{AuthorToken, IndexEdge};

/// Group author tokens by token: one posting list of authors per token.
pub fn posting_lists(author_tokens: &[AuthorToken]) -> AHashMap<String, Vec<String>> {
    let mut lists: AHashMap<String, Vec<String>> = AHashMap::new();
    for at in author_tokens {
        lists
            .entry(at.token.clone())
            .or_default()
            .push(at.author_id.clone());
    }
    lists
}

/// Self-join each posting list into ordered author-pair edges.
///
/// The ordering filter `author_1 >= author_2` (case-insensitive, with the
/// raw ids as tie-break) keeps each unordered pair exactly once, even when
/// two distinct ids differ only by case. Self-pairs survive this stage on
/// purpose; the degenerate-pair filter in the scorer removes them, since a
/// self-pair's common count always equals the author's vocabulary size.
pub fn build_index(lists: &AHashMap<String, Vec<String>>) -> Vec<IndexEdge> {
    lists
        .par_iter()
        .flat_map(|(token, authors)| {
            let mut edges = Vec::new();
            for a1 in authors {
                for a2 in authors {
                    if retains_orientation(a1, a2) {
                        edges.push(IndexEdge {
                            author_1: a1.clone(),
                            author_2: a2.clone(),
                            token: token.clone(),
                        });
                    }
                }
            }
            edges
        })
        .collect()
}

/// Exactly one of `(a, b)` and `(b, a)` is retained for distinct ids, and
/// `(a, a)` is retained. A posting list never holds the same id twice, so a
/// case-insensitive tie between distinct ids is broken on the raw ids.
fn retains_orientation(a1: &str, a2: &str) -> bool {
    match cmp_ignore_case(a1, a2) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => a1 >= a2,
    }
}

/// Case-insensitive order on author ids.
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
