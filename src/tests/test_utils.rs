//! Test utilities and fixtures for Moana Index.
//!
//! Reusable proptest strategies and brute-force oracles for the suffix trie
//! property suites.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

use crate::data_structures::lau_trie::LauTrie;

/// Maximum number of strings in a generated corpus.
const MAX_CORPUS_LEN: usize = 8;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Strings over a tiny alphabet so that generated corpora share plenty of
/// substrings, which is where the interesting trie topology comes from.
pub fn word_strategy(max_length: usize) -> BoxedStrategy<String> {
    proptest::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'é']), 0..=max_length)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate a corpus of words for property-based testing.
pub fn corpus_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(word_strategy(8), 0..=MAX_CORPUS_LEN).boxed()
}

/// Builds a trie over `corpus` with default configuration.
pub fn trie_from(corpus: &[String]) -> LauTrie {
    let mut trie = LauTrie::new();
    trie.add_all(corpus).expect("generated corpus is free of sentinels");
    trie
}

/// Counts overlapping occurrences of `needle` in `haystack`, by character.
pub fn brute_force_count(haystack: &str, needle: &str) -> usize {
    let hay: Vec<char> = haystack.chars().collect();
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return hay.len() + 1;
    }
    hay.windows(needle.len()).filter(|window| *window == needle.as_slice()).count()
}

/// Every contiguous substring of `s`, the empty one included.
pub fn all_substrings(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut substrings = vec![String::new()];
    for start in 0..chars.len() {
        for end in start + 1..=chars.len() {
            substrings.push(chars[start..end].iter().collect());
        }
    }
    substrings
}
