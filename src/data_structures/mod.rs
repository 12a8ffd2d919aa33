//! Data structures for Moana Index.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - No recursion on data-dependent depth
//! - Deterministic results independent of hash iteration order

pub mod lau_trie;

// Re-export common data structures
pub use lau_trie::{LauTrie, LauTrieConfig, LauTrieError, LauTrieResult, SharedLauTrie};
