// Copyright (c) 2025 Moana Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lau Suffix Trie Implementation
//!
//! A generalized suffix trie: every suffix of every inserted string becomes a
//! path from the root, so substring containment, occurrence counting and
//! completion all reduce to walking the trie along the query.
//!
//! Each inserted string `s` is wrapped as `initiator + s + terminator`, where
//! the terminator is the delimiter followed by a fixed-width encoding of the
//! insertion number (see [`terminator`]). The initiator anchors string starts,
//! the delimiter anchors string ends, and the unique digits keep the suffixes
//! of different strings from ever ending on the same leaf.
//!
//! # Example
//!
//! ```
//! use moana_index_lib::data_structures::lau_trie::LauTrie;
//!
//! let mut trie = LauTrie::new();
//! for word in ["bear", "bean", "be"] {
//!     trie.add(word).unwrap();
//! }
//!
//! assert!(trie.contains_substring("ea"));
//! assert!(trie.contains_string("be"));
//! assert_eq!(trie.count_substring("e").unwrap(), 3);
//! assert_eq!(trie.complete_string("be").unwrap(), vec!["be", "bean", "bear"]);
//! assert_eq!(trie.most_frequent_begin().unwrap(), 'b');
//! assert_eq!(trie.longest_repeat().unwrap(), "be");
//! ```
//!
//! # Performance Characteristics
//!
//! - Insertion: O(m²) node visits for a string of m characters
//! - Containment: O(|q|)
//! - Counting and completion: O(|q|) descent plus the size of the subtree reached
//!
//! All traversals use explicit work stacks, so string length is bounded by
//! memory only, never by call-stack depth.

mod analytics;
mod error;
mod node;
mod shared;
pub mod terminator;

use std::iter;

pub use analytics::TrieSummary;
pub use error::LauTrieError;
pub use node::TrieNode;
pub use shared::SharedLauTrie;
use terminator::{decode_terminator, unique_terminator, TERMINATOR_LEN};

/// Result type for Lau trie operations
pub type LauTrieResult<T> = Result<T, LauTrieError>;

/// Default sentinel marking the start of every inserted string.
pub const DEFAULT_INITIATOR: char = '#';

/// Default sentinel opening every terminator.
pub const DEFAULT_DELIMITER: char = '$';

/// Default limit on inserted string length, in characters.
pub const DEFAULT_MAX_STRING_CHARS: usize = 4096;

/// Configuration options for the Lau suffix trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauTrieConfig {
    /// Sentinel prepended to every inserted string
    pub initiator: char,

    /// Sentinel opening every unique terminator
    pub delimiter: char,

    /// Longest string accepted by [`LauTrie::add`], `None` for no limit.
    /// Insertion cost grows quadratically with length.
    pub max_string_chars: Option<usize>,
}

impl Default for LauTrieConfig {
    fn default() -> Self {
        Self {
            initiator: DEFAULT_INITIATOR,
            delimiter: DEFAULT_DELIMITER,
            max_string_chars: Some(DEFAULT_MAX_STRING_CHARS),
        }
    }
}

impl LauTrieConfig {
    /// Checks that the sentinels can be told apart.
    pub fn validate(&self) -> LauTrieResult<()> {
        if self.initiator == self.delimiter {
            return Err(LauTrieError::InvalidSentinels(self.initiator));
        }
        Ok(())
    }

    fn is_reserved(&self, c: char) -> bool {
        c == self.initiator || c == self.delimiter
    }
}

/// Generalized suffix trie over a batch of strings.
///
/// Built append-only through [`add`](Self::add) and queried read-only
/// afterwards. A finished trie is `Send + Sync` and can be shared across
/// threads without locking; use [`SharedLauTrie`] when insertions and queries
/// need to interleave across threads.
#[derive(Debug)]
pub struct LauTrie {
    /// The root node, standing for the empty prefix
    root: TrieNode,

    /// Configuration options
    config: LauTrieConfig,

    /// Number of strings inserted so far; drives terminator uniqueness
    count: u64,
}

impl LauTrie {
    /// Creates a new empty `LauTrie` with default configuration.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            config: LauTrieConfig::default(),
            count: 0,
        }
    }

    /// Creates a new empty `LauTrie` with the specified configuration.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::InvalidSentinels` - If initiator and delimiter coincide.
    pub fn with_config(config: LauTrieConfig) -> LauTrieResult<Self> {
        config.validate()?;
        Ok(Self {
            root: TrieNode::new(),
            config,
            count: 0,
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LauTrieConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of strings inserted so far.
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Returns `true` if no string has been inserted.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Counts every node in the trie, the root included.
    pub fn node_count(&self) -> usize {
        let mut nodes = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            nodes += 1;
            stack.extend(node.get_children().map(|(_, child)| child));
        }
        nodes
    }

    /// Adds a string to the trie by inserting every suffix of its wrapped form.
    ///
    /// The string is validated before anything is touched, so a rejected
    /// string leaves the trie exactly as it was.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::ReservedCharacter` - If the string contains a sentinel.
    /// * `LauTrieError::StringTooLong` - If the string exceeds `max_string_chars`.
    /// * `LauTrieError::CapacityExceeded` - If the terminator space is used up.
    pub fn add<S: AsRef<str>>(&mut self, s: S) -> LauTrieResult<()> {
        let s = s.as_ref();
        let length = self.validate_string(s)?;
        let terminator = unique_terminator(self.config.delimiter, self.count)?;
        debug_assert_eq!(
            decode_terminator(self.config.delimiter, &terminator),
            Some(self.count)
        );

        let mut wrapped = Vec::with_capacity(length + 1 + TERMINATOR_LEN);
        wrapped.push(self.config.initiator);
        wrapped.extend(s.chars());
        wrapped.extend(terminator);

        // Suffixes start at the initiator, at every character of `s`, and at
        // the delimiter itself.
        let last_start = wrapped.len() - TERMINATOR_LEN;
        for start in 0..=last_start {
            let mut node = &mut self.root;
            for &c in &wrapped[start..] {
                node = node.add_child(c);
            }
        }

        self.count += 1;
        tracing::trace!(count = self.count, chars = length, "string indexed");
        Ok(())
    }

    /// Adds every string from `strings`, stopping at the first failure.
    ///
    /// Strings inserted before the failing one stay in the trie.
    ///
    /// # Returns
    ///
    /// The number of strings inserted.
    pub fn add_all<I, S>(&mut self, strings: I) -> LauTrieResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inserted = 0;
        for s in strings {
            self.add(s)?;
            inserted += 1;
        }
        tracing::debug!(inserted, total = self.count, "batch indexed");
        Ok(inserted)
    }

    /// Returns whether `q` occurs as a substring of any inserted string.
    ///
    /// The empty string is always contained.
    pub fn contains_substring(&self, q: &str) -> bool {
        self.descend(q.chars()).is_some()
    }

    /// Returns whether `q` has been inserted verbatim.
    pub fn contains_string(&self, q: &str) -> bool {
        if q.chars().any(|c| self.config.is_reserved(c)) {
            return false;
        }
        let path = iter::once(self.config.initiator)
            .chain(q.chars())
            .chain(iter::once(self.config.delimiter));
        self.descend(path).is_some()
    }

    /// Returns the number of occurrences of `q` across all inserted strings,
    /// overlapping and repeated occurrences included.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::ReservedCharacter` - If `q` contains a sentinel.
    /// * `LauTrieError::NotFound` - If `q` does not occur at all.
    pub fn count_substring(&self, q: &str) -> LauTrieResult<usize> {
        self.check_query(q)?;

        if q.is_empty() {
            // The empty string occurs at every position of every string,
            // end included. Those are exactly the suffixes not anchored on
            // the initiator.
            let initiator = self.config.initiator;
            return Ok(self
                .root
                .get_children()
                .filter(|(label, _)| *label != initiator)
                .map(|(_, child)| leaf_count(child))
                .sum());
        }

        let node = self
            .descend(q.chars())
            .ok_or_else(|| LauTrieError::NotFound(q.to_string()))?;
        Ok(leaf_count(node))
    }

    /// Returns, sorted, every way an occurrence of `q` continues up to the end
    /// of its string, each prefixed with `q`.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::ReservedCharacter` - If `q` contains a sentinel.
    /// * `LauTrieError::NotFound` - If `q` does not occur at all.
    pub fn complete_substring(&self, q: &str) -> LauTrieResult<Vec<String>> {
        self.check_query(q)?;
        let node = self
            .descend(q.chars())
            .ok_or_else(|| LauTrieError::NotFound(q.to_string()))?;
        // Initiator-anchored suffixes are not occurrences of the empty string.
        let skip = q.is_empty().then_some(self.config.initiator);
        Ok(self.prefixed_completions(q, node, skip))
    }

    /// Returns, sorted, every inserted string that starts with `q`.
    ///
    /// Duplicated insertions appear once per insertion. On an empty trie the
    /// empty prefix completes to an empty list.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::ReservedCharacter` - If `q` contains a sentinel.
    /// * `LauTrieError::NotFound` - If no inserted string starts with `q`.
    pub fn complete_string(&self, q: &str) -> LauTrieResult<Vec<String>> {
        self.check_query(q)?;
        if q.is_empty() && self.is_empty() {
            return Ok(Vec::new());
        }
        let node = self
            .descend(iter::once(self.config.initiator).chain(q.chars()))
            .ok_or_else(|| LauTrieError::NotFound(q.to_string()))?;
        Ok(self.prefixed_completions(q, node, None))
    }

    /// Follows `path` from the root, stopping at the first missing edge.
    fn descend<I>(&self, path: I) -> Option<&TrieNode>
    where
        I: IntoIterator<Item = char>,
    {
        path.into_iter()
            .try_fold(&self.root, |node, c| node.get_child(c))
    }

    /// Returns the node below the initiator edge, which exists once anything
    /// has been inserted.
    fn initiator_node(&self) -> LauTrieResult<&TrieNode> {
        self.root
            .get_child(self.config.initiator)
            .ok_or(LauTrieError::Empty)
    }

    fn validate_string(&self, s: &str) -> LauTrieResult<usize> {
        let mut length = 0;
        for (position, c) in s.chars().enumerate() {
            if self.config.is_reserved(c) {
                return Err(LauTrieError::ReservedCharacter {
                    character: c,
                    position,
                });
            }
            length += 1;
        }

        if let Some(max_chars) = self.config.max_string_chars {
            if length > max_chars {
                return Err(LauTrieError::StringTooLong { length, max_chars });
            }
        }
        Ok(length)
    }

    fn check_query(&self, q: &str) -> LauTrieResult<()> {
        match q.chars().enumerate().find(|(_, c)| self.config.is_reserved(*c)) {
            Some((position, character)) => Err(LauTrieError::ReservedCharacter {
                character,
                position,
            }),
            None => Ok(()),
        }
    }

    fn prefixed_completions(&self, q: &str, node: &TrieNode, skip: Option<char>) -> Vec<String> {
        let mut results: Vec<String> = self
            .completions(node, skip)
            .into_iter()
            .map(|completion| format!("{q}{completion}"))
            .collect();
        results.sort_unstable();
        results
    }

    /// Enumerates the continuations below `node` up to each string end.
    ///
    /// A delimiter edge yields the empty continuation once per terminator
    /// below it. A childless node yields the empty continuation once. The
    /// `skip` edge is ignored on `node` itself only.
    fn completions(&self, node: &TrieNode, skip: Option<char>) -> Vec<String> {
        let delimiter = self.config.delimiter;
        let mut completions = Vec::new();
        let mut stack = vec![(node, String::new(), skip)];

        while let Some((current, prefix, skip)) = stack.pop() {
            if current.is_leaf() {
                completions.push(prefix);
                continue;
            }
            for (label, child) in current.get_children() {
                if Some(label) == skip {
                    continue;
                }
                if label == delimiter {
                    let ends = leaf_count(child);
                    completions.extend(iter::repeat(prefix.clone()).take(ends));
                } else {
                    let mut extended = prefix.clone();
                    extended.push(label);
                    stack.push((child, extended, None));
                }
            }
        }
        completions
    }
}

impl Default for LauTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of leaves below `node`, or 1 if `node` is itself a leaf.
///
/// Every inserted suffix ends on its own leaf, so this is also the number of
/// suffixes passing through `node`.
pub(crate) fn leaf_count(node: &TrieNode) -> usize {
    let mut leaves = 0;
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if current.is_leaf() {
            leaves += 1;
        } else {
            stack.extend(current.get_children().map(|(_, child)| child));
        }
    }
    leaves
}
