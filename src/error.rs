//! Error type shared by the trie, the key translation and the range loader.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Reserving space for the node arena failed.
    #[error("failed to allocate memory for trie: {0}")]
    Alloc(#[from] TryReserveError),

    /// A search was issued on a trie that holds no entry.
    #[error("cannot query an empty trie")]
    EmptyTrie,

    /// The trie was asked to display entries, but no renderer was given on construction.
    #[error("no display function defined")]
    MissingRenderer,

    /// Writing to a sink or reading records failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A query could not be translated into a key.
    #[error("invalid key `{0}`")]
    InvalidKey(String),

    /// A range record could not be parsed.
    #[error("malformed record on line {line}: {reason}")]
    Malformed {
        /// 1-based line number of the offending record.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// The record source did not contain a single record.
    #[error("empty dataset")]
    EmptyDataset,
}
