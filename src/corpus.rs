// Copyright (c) 2025 Moana Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Line-oriented corpus loading.
//!
//! A corpus is a UTF-8 text file holding one string per line. Loading is kept
//! apart from the index itself: the trie only ever sees an ordered sequence of
//! strings.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::corpus::CorpusConfig;
use crate::config::MoanaConfig;
use crate::data_structures::lau_trie::LauTrie;
use crate::error::corpus::CorpusError;
use crate::error::MoanaResult;

/// Splits `reader` into corpus lines according to `options`.
pub fn read_lines<R: BufRead>(reader: R, options: &CorpusConfig) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = if options.trim {
            line.trim().to_string()
        } else {
            line
        };
        if options.skip_blank && line.trim().is_empty() {
            continue;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Reads every line of the corpus at `path`.
pub fn load_lines<P: AsRef<Path>>(path: P, options: &CorpusConfig) -> Result<Vec<String>, CorpusError> {
    let path = path.as_ref();
    let read_error = |source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    let lines = read_lines(BufReader::new(file), options).map_err(read_error)?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "corpus loaded");
    Ok(lines)
}

/// Adds every line of the corpus at `path` to `trie`.
///
/// # Returns
///
/// The number of strings indexed. The first rejected line aborts the load and
/// is reported with its one-based line number.
pub fn index_file<P: AsRef<Path>>(
    path: P,
    trie: &mut LauTrie,
    options: &CorpusConfig,
) -> Result<usize, CorpusError> {
    let path = path.as_ref();
    let lines = load_lines(path, options)?;
    for (index, line) in lines.iter().enumerate() {
        trie.add(line).map_err(|source| CorpusError::Rejected {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
    }
    tracing::debug!(path = %path.display(), strings = lines.len(), "corpus indexed");
    Ok(lines.len())
}

/// Builds a fresh index over the corpus at `path` using `config`.
pub fn build_index<P: AsRef<Path>>(path: P, config: &MoanaConfig) -> MoanaResult<LauTrie> {
    let mut trie = LauTrie::with_config(config.trie.to_trie_config()?)?;
    index_file(path, &mut trie, &config.corpus)?;
    Ok(trie)
}
