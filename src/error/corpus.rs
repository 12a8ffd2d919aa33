//! Corpus loading error module.

use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::lau_trie::LauTrieError;

/// Errors that can occur while reading a corpus into an index.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The corpus file could not be opened or read.
    #[error("Failed to read corpus {path}: {source}")]
    Read {
        /// Path of the corpus file
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// A line could not be indexed.
    #[error("Line {line} of {path} rejected: {source}")]
    Rejected {
        /// Path of the corpus file
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// Why the index refused the line
        #[source]
        source: LauTrieError,
    },
}
