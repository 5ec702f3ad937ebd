//! Tokenizer/Filter stage: posts in, deduplicated stop-word-free
//! (author, token) pairs out.

use ahash::AHashSet;
use rayon::prelude::*;

use crate::config::{AssertionLevel, PipelineConfig};
use crate::error::{Error, Result};
use crate::record::{AuthorToken, Post};

/// The reference stop-word set, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct StopWords(AHashSet<String>);

impl StopWords {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(AHashSet::new())
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for StopWords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for StopWords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

/// Tokenize a corpus of posts into distinct (author, token) pairs.
///
/// Per post: enforce the text length assertion, split on whitespace, drop
/// tokens shorter than `min_token_len`, and drop stop-words (a set
/// difference against `stop_words`). The surviving pairs are deduplicated
/// across the whole corpus, so each author contributes a given token once.
///
/// In `Strict` mode a post failing the length assertion aborts the run
/// with [`Error::AssertionFailed`]; in `Lenient` mode it is skipped.
pub fn tokenize_posts(
    posts: &[Post],
    stop_words: &StopWords,
    config: &PipelineConfig,
) -> Result<Vec<AuthorToken>> {
    let per_post: Vec<Vec<AuthorToken>> = posts
        .par_iter()
        .map(|post| split_post(post, stop_words, config))
        .collect::<Result<_>>()?;

    let unique: AHashSet<AuthorToken> = per_post.into_iter().flatten().collect();
    Ok(unique.into_iter().collect())
}

fn split_post(
    post: &Post,
    stop_words: &StopWords,
    config: &PipelineConfig,
) -> Result<Vec<AuthorToken>> {
    let len = post.text.chars().count();
    if len < config.min_post_len || len > config.max_post_len {
        return match config.assertion_level {
            AssertionLevel::Strict => Err(Error::AssertionFailed {
                author_id: post.author_id.clone(),
                len,
                min: config.min_post_len,
                max: config.max_post_len,
            }),
            AssertionLevel::Lenient => Ok(Vec::new()),
        };
    }

    Ok(post
        .text
        .split_whitespace()
        .filter(|token| token.chars().count() >= config.min_token_len)
        .filter(|token| !stop_words.contains(token))
        .map(|token| AuthorToken {
            author_id: post.author_id.clone(),
            token: token.to_string(),
        })
        .collect())
}
