//! Error types for roamtree

use std::io;
use std::path::PathBuf;

/// Fatal errors. Unreadable files are not errors; the converter skips them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input directory could not be resolved.
    #[error("cannot access '{}': {source}", path.display())]
    InvalidRoot { path: PathBuf, source: io::Error },

    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Listing a directory failed partway through the walk.
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("cannot serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
