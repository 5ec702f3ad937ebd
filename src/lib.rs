//! # simrec
//!
//! A batch "similar authors" recommender over short text posts.
//!
//! simrec tokenizes a corpus of (author, text) posts, removes stop-words,
//! builds an inverted index to generate candidate author pairs without an
//! all-pairs cross product, and scores each pair with the Ochiai
//! coefficient on the authors' vocabulary sets. The output is a directed
//! "authors to follow" relation, emitted in both directions of every
//! retained pair.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! simrec --posts posts.tsv --stopwords en.tsv \
//!        --token-freq-out tokens.tsv --similarity-out similarity.tsv
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use simrec::prelude::*;
//!
//! let posts = vec![
//!     Post::new("u1", "the cat sat on the mat"),
//!     Post::new("u2", "a cat sat on a rug"),
//! ];
//! let stop_words: StopWords = ["the", "a", "on"].into_iter().collect();
//!
//! let config = PipelineConfig {
//!     min_common_tokens: 1,
//!     ..PipelineConfig::default()
//! };
//! let pipeline = Pipeline::new(config).unwrap();
//! let output = pipeline.run(&posts, &stop_words).unwrap();
//!
//! // Both directions of the (u1, u2) pair, identical score.
//! assert_eq!(output.similarities.len(), 2);
//! ```
//!
//! ## Crate Structure
//!
//! simrec is composed of two crates:
//!
//! - [`simrec-core`](https://docs.rs/simrec-core) - pipeline stages (tokenize, index, aggregate, score)
//! - [`simrec-io`](https://docs.rs/simrec-io) - TSV source and sink taps
//!
//! ## Pipeline shape
//!
//! Every stage is either a stateless per-record transform or a grouped
//! aggregation that is a pure function of one group's records, so the
//! whole graph is data-parallel and safely re-executable after partial
//! failure.

// Re-export core types
pub use simrec_core::{
    AssertionLevel, AuthorToken, Error, IndexEdge, PairCommonCount, Pipeline, PipelineConfig,
    PipelineOutput, Post, Result, SimilarityResult, StopWords, TokenCount,
};

// Re-export the taps
pub use simrec_io::{read_posts, read_stop_words, write_similarities, write_token_counts};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        read_posts, read_stop_words, write_similarities, write_token_counts, AssertionLevel,
        Error, Pipeline, PipelineConfig, PipelineOutput, Post, Result, SimilarityResult,
        StopWords, TokenCount,
    };
}
