use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What to do with a post that fails the length assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssertionLevel {
    /// Abort the run, surfacing the offending record.
    Strict,
    /// Silently exclude the record from tokenization.
    Lenient,
}

/// Tunable parameters for the similarity pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Minimum number of shared tokens for an author pair to be scored.
    pub min_common_tokens: u64,
    /// Lower similarity bound, exclusive.
    pub min_similarity: f64,
    /// Upper similarity bound, exclusive.
    pub max_similarity: f64,
    /// Minimum token length in chars; shorter tokens are discarded.
    pub min_token_len: usize,
    /// Length-assertion bounds on the post text, in chars.
    pub min_post_len: usize,
    pub max_post_len: usize,
    pub assertion_level: AssertionLevel,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_common_tokens: 4,
            min_similarity: 0.010,
            max_similarity: 0.990,
            min_token_len: 2,
            min_post_len: 6,
            max_post_len: 150,
            assertion_level: AssertionLevel::Strict,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_similarity >= self.max_similarity {
            return Err(Error::InvalidConfig(format!(
                "min_similarity {} must be below max_similarity {}",
                self.min_similarity, self.max_similarity
            )));
        }
        if self.min_post_len > self.max_post_len {
            return Err(Error::InvalidConfig(format!(
                "min_post_len {} must not exceed max_post_len {}",
                self.min_post_len, self.max_post_len
            )));
        }
        Ok(())
    }
}
