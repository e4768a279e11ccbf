use std::path::PathBuf;
use thiserror::Error;

/// A random pick was requested from an empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot pick a random element from an empty sequence")]
pub struct EmptySequenceError;

#[derive(Debug, Error)]
pub enum RoundError {
    /// No target was pinned and the pool has nothing to draw from.
    #[error("cannot generate a round from an empty pool without a pinned target")]
    EmptyPool(#[source] EmptySequenceError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vocabulary JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid entry: {0}")]
    InvalidEntry(&'static str),
}
