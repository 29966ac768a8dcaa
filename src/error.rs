//! Error types for the commitment tree library and its CLI surface.

use thiserror::Error;

/// Tree construction errors
#[derive(Debug, Error)]
pub enum TreeError {
    /// Construction over zero records is rejected up front: the recursive
    /// reduction has no meaningful base case for an empty sequence.
    #[error("cannot build a tree from an empty record list")]
    EmptyInput,

    /// A byte record was not valid UTF-8, the fixed input encoding.
    #[error("record {index} is not valid UTF-8: {source}")]
    InvalidEncoding {
        index: usize,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// CLI and logging errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Output error: {0}")]
    Output(String),
}
