//! Moana Index Library
//!
//! An in-memory text index built on a generalized suffix trie. Every suffix of
//! every inserted string is stored, which turns substring containment,
//! occurrence counting, completion and character-frequency questions into
//! walks over the trie.
//!
//! # Architecture
//!
//! - [`data_structures::lau_trie`] holds the index: nodes, insertion, queries
//!   and analytics.
//! - [`corpus`] reads line-oriented corpus files into an index.
//! - [`config`] loads layered configuration.
//! - [`error`] rolls component errors up into [`error::MoanaError`].

pub mod config;
pub mod corpus;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Moana Index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
