// Copyright (c) 2025 Moana Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Frequency statistics and repeat detection over a [`LauTrie`].
//!
//! Every ranking uses the `(count, label)` pair. `most_*` queries pick the
//! highest count, `least_*` queries the lowest, and equal counts always go to
//! the smallest label so results never depend on hash-map iteration order.

use fnv::FnvHashMap;
use serde::Serialize;

use super::error::LauTrieError;
use super::node::TrieNode;
use super::{leaf_count, LauTrie, LauTrieResult};

#[derive(Debug, Clone, Copy)]
enum Extremum {
    Most,
    Least,
}

impl Extremum {
    fn pick<I>(self, tallies: I) -> Option<char>
    where
        I: IntoIterator<Item = (char, usize)>,
    {
        let tallies = tallies.into_iter();
        let winner = match self {
            Self::Most => tallies.max_by(|(la, ca), (lb, cb)| ca.cmp(cb).then(lb.cmp(la))),
            Self::Least => tallies.min_by(|(la, ca), (lb, cb)| ca.cmp(cb).then(la.cmp(lb))),
        };
        winner.map(|(label, _)| label)
    }
}

/// Snapshot of the trie statistics, one field per query.
///
/// Queries without an answer (empty trie, no candidates) are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrieSummary {
    /// Number of inserted strings
    pub strings: u64,
    /// Number of trie nodes, root included
    pub nodes: usize,
    /// Most frequent character overall
    pub most_frequent: Option<char>,
    /// Least frequent character overall
    pub least_frequent: Option<char>,
    /// Most common first character
    pub most_frequent_begin: Option<char>,
    /// Least common first character
    pub least_frequent_begin: Option<char>,
    /// Most common last character
    pub most_frequent_end: Option<char>,
    /// Least common last character
    pub least_frequent_end: Option<char>,
    /// Longest substring occurring at least twice
    pub longest_repeat: Option<String>,
}

impl LauTrie {
    /// Returns the character that occurs most often in the inserted strings.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::Empty` - If nothing has been inserted.
    /// * `LauTrieError::NoCandidates` - If only empty strings were inserted.
    pub fn most_frequent(&self) -> LauTrieResult<char> {
        self.rank_overall(Extremum::Most, "most_frequent")
    }

    /// Returns the character that occurs least often in the inserted strings.
    ///
    /// # Errors
    ///
    /// Same as [`most_frequent`](Self::most_frequent).
    pub fn least_frequent(&self) -> LauTrieResult<char> {
        self.rank_overall(Extremum::Least, "least_frequent")
    }

    /// Returns the character most inserted strings begin with.
    ///
    /// # Errors
    ///
    /// Same as [`most_frequent`](Self::most_frequent).
    pub fn most_frequent_begin(&self) -> LauTrieResult<char> {
        self.rank_begin(Extremum::Most, "most_frequent_begin")
    }

    /// Returns the character fewest inserted strings begin with.
    ///
    /// # Errors
    ///
    /// Same as [`most_frequent`](Self::most_frequent).
    pub fn least_frequent_begin(&self) -> LauTrieResult<char> {
        self.rank_begin(Extremum::Least, "least_frequent_begin")
    }

    /// Returns the character most inserted strings end with.
    ///
    /// # Errors
    ///
    /// Same as [`most_frequent`](Self::most_frequent).
    pub fn most_frequent_end(&self) -> LauTrieResult<char> {
        self.rank_end(Extremum::Most, "most_frequent_end")
    }

    /// Returns the character fewest inserted strings end with.
    ///
    /// # Errors
    ///
    /// Same as [`most_frequent`](Self::most_frequent).
    pub fn least_frequent_end(&self) -> LauTrieResult<char> {
        self.rank_end(Extremum::Least, "least_frequent_end")
    }

    /// Returns the longest substring that occurs at least twice in the corpus,
    /// counting occurrences within a single string and across strings.
    ///
    /// Among equally long repeats the lexicographically smallest wins. When no
    /// non-empty substring repeats, the result is the empty string.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::Empty` - If nothing has been inserted.
    pub fn longest_repeat(&self) -> LauTrieResult<String> {
        if self.is_empty() {
            return Err(LauTrieError::Empty);
        }

        let initiator = self.config.initiator;
        let delimiter = self.config.delimiter;

        // Visited nodes as (label, parent) links; paths are only spelled out
        // for the deepest repeats once the walk is done.
        let mut links: Vec<(char, Option<usize>)> = Vec::new();
        let mut best_depth = 0;
        let mut candidates: Vec<usize> = Vec::new();

        let mut stack: Vec<(&TrieNode, char, Option<usize>, usize)> = self
            .root
            .get_children()
            .filter(|(label, _)| *label != initiator && *label != delimiter)
            .map(|(label, child)| (child, label, None, 1))
            .collect();

        while let Some((node, label, parent, depth)) = stack.pop() {
            let index = links.len();
            links.push((label, parent));

            if self.is_repeated(node) {
                if depth > best_depth {
                    best_depth = depth;
                    candidates.clear();
                }
                if depth == best_depth {
                    candidates.push(index);
                }
            }
            for (label, child) in node.get_children() {
                if label != delimiter {
                    stack.push((child, label, Some(index), depth + 1));
                }
            }
        }

        let spell = |mut index: usize| {
            let mut chars = Vec::with_capacity(best_depth);
            loop {
                let (label, parent) = links[index];
                chars.push(label);
                match parent {
                    Some(up) => index = up,
                    None => break,
                }
            }
            chars.into_iter().rev().collect::<String>()
        };
        Ok(candidates.into_iter().map(spell).min().unwrap_or_default())
    }

    /// Collects every statistic into one serializable snapshot.
    pub fn summary(&self) -> TrieSummary {
        TrieSummary {
            strings: self.len(),
            nodes: self.node_count(),
            most_frequent: self.most_frequent().ok(),
            least_frequent: self.least_frequent().ok(),
            most_frequent_begin: self.most_frequent_begin().ok(),
            least_frequent_begin: self.least_frequent_begin().ok(),
            most_frequent_end: self.most_frequent_end().ok(),
            least_frequent_end: self.least_frequent_end().ok(),
            longest_repeat: self.longest_repeat().ok(),
        }
    }

    // The deepest node with two or more leaves below it either branches or
    // has a lone delimiter edge shared by duplicate strings. A single real
    // edge would make its child qualify at a greater depth.
    fn is_repeated(&self, node: &TrieNode) -> bool {
        match node.num_children() {
            0 => false,
            1 => node
                .get_child(self.config.delimiter)
                .map_or(false, |terminators| leaf_count(terminators) >= 2),
            _ => true,
        }
    }

    fn rank_overall(&self, extremum: Extremum, query: &'static str) -> LauTrieResult<char> {
        if self.is_empty() {
            return Err(LauTrieError::Empty);
        }
        let tallies = self
            .root
            .get_children()
            .filter(|(label, _)| !self.config.is_reserved(*label))
            .map(|(label, child)| (label, leaf_count(child)));
        extremum
            .pick(tallies)
            .ok_or(LauTrieError::NoCandidates(query))
    }

    fn rank_begin(&self, extremum: Extremum, query: &'static str) -> LauTrieResult<char> {
        let delimiter = self.config.delimiter;
        let tallies = self
            .initiator_node()?
            .get_children()
            .filter(|(label, _)| *label != delimiter)
            .map(|(label, child)| (label, leaf_count(child)));
        extremum
            .pick(tallies)
            .ok_or(LauTrieError::NoCandidates(query))
    }

    fn rank_end(&self, extremum: Extremum, query: &'static str) -> LauTrieResult<char> {
        let ends = self.end_tallies()?;
        extremum
            .pick(ends)
            .ok_or(LauTrieError::NoCandidates(query))
    }

    /// Counts, per character, how many inserted strings end with it.
    fn end_tallies(&self) -> LauTrieResult<FnvHashMap<char, usize>> {
        let delimiter = self.config.delimiter;
        let mut ends = FnvHashMap::default();
        let mut stack: Vec<(char, &TrieNode)> = self
            .initiator_node()?
            .get_children()
            .filter(|(label, _)| *label != delimiter)
            .collect();

        while let Some((label, node)) = stack.pop() {
            if let Some(terminators) = node.get_child(delimiter) {
                *ends.entry(label).or_insert(0) += leaf_count(terminators);
            }
            stack.extend(node.get_children().filter(|(l, _)| *l != delimiter));
        }
        Ok(ends)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[&str]) -> LauTrie {
        let mut trie = LauTrie::new();
        trie.add_all(words.iter().copied()).unwrap();
        trie
    }

    #[test]
    fn test_overall_frequency() {
        let trie = trie_of(&["banana", "bandana"]);

        // a: 3 + 3, n: 2 + 2, b: 1 + 1, d: 0 + 1
        assert_eq!(trie.most_frequent().unwrap(), 'a');
        assert_eq!(trie.least_frequent().unwrap(), 'd');
    }

    #[test]
    fn test_begin_and_end_frequency() {
        let trie = trie_of(&["cat", "cow", "dog", "cot"]);

        assert_eq!(trie.most_frequent_begin().unwrap(), 'c');
        assert_eq!(trie.least_frequent_begin().unwrap(), 'd');
        assert_eq!(trie.most_frequent_end().unwrap(), 't');
        // g and w both end one string; g is smaller.
        assert_eq!(trie.least_frequent_end().unwrap(), 'g');
    }

    #[test]
    fn test_tie_break_prefers_smallest_label() {
        let trie = trie_of(&["ba", "ab"]);

        assert_eq!(trie.most_frequent().unwrap(), 'a');
        assert_eq!(trie.least_frequent().unwrap(), 'a');
        assert_eq!(trie.most_frequent_begin().unwrap(), 'a');
        assert_eq!(trie.most_frequent_end().unwrap(), 'a');
    }

    #[test]
    fn test_end_counts_duplicates() {
        let trie = trie_of(&["xa", "xa", "yb", "zb", "wb"]);

        assert_eq!(trie.most_frequent_end().unwrap(), 'b');
        assert_eq!(trie.least_frequent_end().unwrap(), 'a');

        let trie = trie_of(&["xa", "xa", "xa", "yb", "zb"]);
        assert_eq!(trie.most_frequent_end().unwrap(), 'a');
    }

    #[test]
    fn test_empty_trie_fails_explicitly() {
        let trie = LauTrie::new();

        assert_eq!(trie.most_frequent(), Err(LauTrieError::Empty));
        assert_eq!(trie.least_frequent(), Err(LauTrieError::Empty));
        assert_eq!(trie.most_frequent_begin(), Err(LauTrieError::Empty));
        assert_eq!(trie.least_frequent_begin(), Err(LauTrieError::Empty));
        assert_eq!(trie.most_frequent_end(), Err(LauTrieError::Empty));
        assert_eq!(trie.least_frequent_end(), Err(LauTrieError::Empty));
        assert_eq!(trie.longest_repeat(), Err(LauTrieError::Empty));
    }

    #[test]
    fn test_only_empty_strings_have_no_candidates() {
        let trie = trie_of(&["", ""]);

        assert_eq!(
            trie.most_frequent(),
            Err(LauTrieError::NoCandidates("most_frequent"))
        );
        assert_eq!(
            trie.least_frequent_begin(),
            Err(LauTrieError::NoCandidates("least_frequent_begin"))
        );
        assert_eq!(
            trie.most_frequent_end(),
            Err(LauTrieError::NoCandidates("most_frequent_end"))
        );
        assert_eq!(trie.longest_repeat().unwrap(), "");
    }

    #[test]
    fn test_longest_repeat() {
        assert_eq!(trie_of(&["bear", "bean", "be"]).longest_repeat().unwrap(), "be");
        assert_eq!(trie_of(&["banana"]).longest_repeat().unwrap(), "ana");
        assert_eq!(trie_of(&["abcd"]).longest_repeat().unwrap(), "");
        assert_eq!(trie_of(&["xyz", "uxyzv"]).longest_repeat().unwrap(), "xyz");
    }

    #[test]
    fn test_longest_repeat_sees_duplicate_strings() {
        assert_eq!(trie_of(&["hello", "hello"]).longest_repeat().unwrap(), "hello");
    }

    #[test]
    fn test_longest_repeat_tie_break() {
        // "ab" and "cd" both repeat twice at depth 2.
        assert_eq!(trie_of(&["cdab", "abcd"]).longest_repeat().unwrap(), "ab");
    }

    #[test]
    fn test_longest_repeat_on_long_duplicate() {
        // Period 26 keeps the trie small while its paths stay long.
        let long: String = (0..1500u32)
            .map(|i| char::from(b'a' + (i * 7 % 26) as u8))
            .collect();
        let trie = trie_of(&[&long, &long, "zz"]);

        assert_eq!(trie.longest_repeat().unwrap(), long);
    }

    #[test]
    fn test_summary() {
        let summary = trie_of(&["bear", "bean", "be"]).summary();

        assert_eq!(summary.strings, 3);
        assert_eq!(summary.most_frequent_begin, Some('b'));
        assert_eq!(summary.longest_repeat.as_deref(), Some("be"));

        let empty = LauTrie::new().summary();
        assert_eq!(empty.strings, 0);
        assert_eq!(empty.nodes, 1);
        assert_eq!(empty.most_frequent, None);
        assert_eq!(empty.longest_repeat, None);
    }
}
