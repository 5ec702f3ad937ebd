//! Token-frequency report: how many distinct authors use each token.
//!
//! Purely informational branch; its output is typically fed back into
//! stop-word curation. Independent of the similarity branch.

use ahash::AHashMap;

use crate::record::{AuthorToken, TokenCount};

/// Count distinct authors per token, sorted by token for stable output.
pub fn token_frequencies(author_tokens: &[AuthorToken]) -> Vec<TokenCount> {
    let mut counts: AHashMap<&str, u64> = AHashMap::new();
    for at in author_tokens {
        *counts.entry(at.token.as_str()).or_insert(0) += 1;
    }

    let mut out: Vec<TokenCount> = counts
        .into_iter()
        .map(|(token, count)| TokenCount {
            token: token.to_string(),
            count,
        })
        .collect();
    out.sort_unstable_by(|a, b| a.token.cmp(&b.token));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(author: &str, token: &str) -> AuthorToken {
        AuthorToken {
            author_id: author.to_string(),
            token: token.to_string(),
        }
    }

    #[test]
    fn counts_authors_per_token() {
        let tokens = vec![at("u1", "cat"), at("u2", "cat"), at("u1", "mat")];
        let freqs = token_frequencies(&tokens);
        assert_eq!(
            freqs,
            vec![
                TokenCount {
                    token: "cat".to_string(),
                    count: 2
                },
                TokenCount {
                    token: "mat".to_string(),
                    count: 1
                },
            ]
        );
    }
}
