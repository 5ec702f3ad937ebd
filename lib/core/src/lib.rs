//! # simrec Core
//!
//! Core library for the simrec author-similarity recommender.
//!
//! This crate provides the batch pipeline that turns a corpus of short
//! posts into "similar author" recommendations:
//!
//! - [`tokenize`] - tokenization, length assertion, stop-word removal
//! - [`frequency`] - diagnostic token-frequency report
//! - [`index`] - inverted-index pair generation from posting lists
//! - [`aggregate`] - pair common-token counts and author vocabulary sizes
//! - [`score`] - Ochiai-coefficient scoring with degenerate-pair removal
//! - [`Pipeline`] - stage composition over a whole corpus
//!
//! ## Example
//!
//! ```rust
//! use simrec_core::{Pipeline, PipelineConfig, Post, StopWords};
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
//! assert_eq!(output.similarities.len(), 2);
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod frequency;
pub mod index;
pub mod pipeline;
pub mod record;
pub mod score;
pub mod tokenize;

pub use config::{AssertionLevel, PipelineConfig};
pub use error::{Error, Result};
pub use pipeline::{Pipeline, PipelineOutput};
pub use record::{
    AuthorToken, IndexEdge, PairCommonCount, Post, SimilarityResult, TokenCount,
};
pub use tokenize::StopWords;
