//! Tuple schemas flowing between pipeline stages.

use serde::{Deserialize, Serialize};

/// Source record: one short text post tagged with its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub author_id: String,
    pub text: String,
}

impl Post {
    pub fn new(author_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author_id: author_id.into(),
            text: text.into(),
        }
    }
}

/// One distinct (author, token) membership. Set semantics: an author
/// contributes each retained token at most once downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorToken {
    pub author_id: String,
    pub token: String,
}

/// Diagnostic aggregate: number of distinct authors using a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub token: String,
    pub count: u64,
}

/// One directed edge of the inverted index: both authors used `token`.
/// Invariant: `author_1 >= author_2` under case-insensitive ordering (raw
/// ids breaking ties), so each unordered pair appears exactly once per
/// shared token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEdge {
    pub author_1: String,
    pub author_2: String,
    pub token: String,
}

/// Aggregate over [`IndexEdge`]: number of distinct tokens shared by a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCommonCount {
    pub author_1: String,
    pub author_2: String,
    pub common: u64,
}

/// Final output row: a directed recommendation with its similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub author_id: String,
    pub recommended_author_id: String,
    pub similarity: f64,
}
