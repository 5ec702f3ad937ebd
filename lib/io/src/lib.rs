//! # simrec IO
//!
//! Delimited-record taps for the simrec pipeline: tab-separated sources
//! with headers, and sinks that fully replace their previous output on
//! every run.

pub mod error;
pub mod tap;

pub use error::{Error, Result};
pub use tap::{read_posts, read_stop_words, write_similarities, write_token_counts};
