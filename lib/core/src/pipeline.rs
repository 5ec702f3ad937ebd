//! Stage composition: one full-corpus batch run.

use crate::aggregate::{count_common, vocab_sizes};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::frequency::token_frequencies;
use crate::index::{build_index, posting_lists};
use crate::record::{Post, SimilarityResult, TokenCount};
use crate::score::score_pairs;
use crate::tokenize::{tokenize_posts, StopWords};

/// Both tail outputs of a pipeline run, each sorted so that reruns over
/// unchanged input are byte-identical once written.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Diagnostic branch: distinct-author count per token.
    pub token_counts: Vec<TokenCount>,
    /// Main branch: directed recommendations with similarity scores.
    pub similarities: Vec<SimilarityResult>,
}

/// The author-similarity pipeline.
///
/// Every stage is a pure function of its input records (per-record
/// transforms) or of a single group's records (grouped aggregations), so
/// any stage can be re-executed after a partial failure without
/// side effects.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full batch over `posts`, recomputing everything from scratch.
    pub fn run(&self, posts: &[Post], stop_words: &StopWords) -> Result<PipelineOutput> {
        let author_tokens = tokenize_posts(posts, stop_words, &self.config)?;

        // Diagnostic branch, independent of the similarity branch.
        let token_counts = token_frequencies(&author_tokens);

        let lists = posting_lists(&author_tokens);
        let edges = build_index(&lists);
        let pairs = count_common(&edges, self.config.min_common_tokens);
        let vocab = vocab_sizes(&author_tokens);
        let similarities = score_pairs(&pairs, &vocab, &self.config);

        Ok(PipelineOutput {
            token_counts,
            similarities,
        })
    }
}
