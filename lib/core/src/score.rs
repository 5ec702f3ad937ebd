//! Similarity scoring: join pair counts with vocabulary sizes, drop
//! degenerate pairs, compute the Ochiai coefficient, and emit both
//! directions of each retained pair.
//!
//! See also:
//! <https://en.wikipedia.org/wiki/Cosine_similarity#Ochiai_coefficient>

use ahash::AHashMap;

use crate::config::PipelineConfig;
use crate::record::{PairCommonCount, SimilarityResult};

/// Ochiai coefficient on binary vocabulary-membership vectors:
/// `|A ∩ B| / sqrt(|A| * |B|)`. Symmetric in the two authors.
#[inline]
#[must_use]
pub fn ochiai(common: u64, token_count_1: u64, token_count_2: u64) -> f64 {
    common as f64 / (token_count_1 as f64 * token_count_2 as f64).sqrt()
}

/// Score every retained pair and emit directed recommendations.
///
/// A pair where one author's whole vocabulary equals the shared set
/// (`token_count == common`) is degenerate, typically a retweet or
/// duplicate-content relationship, and is dropped; this also removes the
/// self-pairs the index stage retained. Surviving scores outside the
/// exclusive `(min_similarity, max_similarity)` window are dropped as
/// near-zero noise or near-identical duplicates.
///
/// Every author named by a pair has at least `common` retained tokens, so
/// the vocabulary lookups cannot miss; a miss here is a bug in the caller's
/// stage wiring, not a recoverable condition.
pub fn score_pairs(
    pairs: &[PairCommonCount],
    vocab: &AHashMap<String, u64>,
    config: &PipelineConfig,
) -> Vec<SimilarityResult> {
    let mut results = Vec::with_capacity(pairs.len() * 2);

    for pair in pairs {
        let token_count_1 = *vocab
            .get(&pair.author_1)
            .expect("author in a retained pair has vocabulary");
        let token_count_2 = *vocab
            .get(&pair.author_2)
            .expect("author in a retained pair has vocabulary");

        if token_count_1 == pair.common || token_count_2 == pair.common {
            continue;
        }

        let similarity = ochiai(pair.common, token_count_1, token_count_2);
        if similarity <= config.min_similarity || similarity >= config.max_similarity {
            continue;
        }

        results.push(SimilarityResult {
            author_id: pair.author_1.clone(),
            recommended_author_id: pair.author_2.clone(),
            similarity,
        });
        results.push(SimilarityResult {
            author_id: pair.author_2.clone(),
            recommended_author_id: pair.author_1.clone(),
            similarity,
        });
    }

    results.sort_by(|a, b| {
        (&a.author_id, &a.recommended_author_id).cmp(&(&b.author_id, &b.recommended_author_id))
    });
    results
}
