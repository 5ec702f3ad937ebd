use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("stream assertion failed: post by {author_id:?} is {len} chars, expected {min}..={max}")]
    AssertionFailed {
        author_id: String,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
