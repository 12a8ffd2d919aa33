// Copyright (c) 2025 Moana Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lau suffix trie.
//!
//! A node is nothing more than a map from an edge label to the child owned
//! behind that edge. Nodes know nothing about strings, suffixes or sentinels;
//! all of that lives in [`LauTrie`](super::LauTrie).

use fnv::FnvHashMap;

/// A node in the Lau suffix trie.
///
/// Each node exclusively owns its children. A node without children is a leaf.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of edge labels to child nodes
    children: FnvHashMap<char, TrieNode>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
        }
    }

    /// Returns the child reached through `label`, if any.
    pub fn get_child(&self, label: char) -> Option<&TrieNode> {
        self.children.get(&label)
    }

    /// Iterates over `(label, child)` pairs in no particular order.
    ///
    /// Callers that need a stable order must sort the labels themselves.
    pub fn get_children(&self) -> impl Iterator<Item = (char, &TrieNode)> + '_ {
        self.children.iter().map(|(label, child)| (*label, child))
    }

    /// Returns the number of direct children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the child for `label`, creating an empty one first if needed.
    pub fn add_child(&mut self, label: char) -> &mut TrieNode {
        self.children.entry(label).or_default()
    }

    /// Detaches the child for `label` and hands its subtree to the caller.
    ///
    /// Returns `None` if no such child existed.
    pub fn remove_child(&mut self, label: char) -> Option<TrieNode> {
        self.children.remove(&label)
    }
}

impl Drop for TrieNode {
    // Suffix tries get as deep as the longest inserted string, so the default
    // recursive drop could overflow the stack. Flatten the teardown instead.
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_child_is_idempotent() {
        let mut node = TrieNode::new();
        assert!(node.is_leaf());

        node.add_child('a').add_child('b');
        node.add_child('a');

        assert_eq!(node.num_children(), 1);
        let child = node.get_child('a').unwrap();
        assert_eq!(child.num_children(), 1);
        assert!(child.get_child('b').unwrap().is_leaf());
    }

    #[test]
    fn test_get_children_lists_every_edge() {
        let mut node = TrieNode::new();
        for label in ['x', 'y', 'z'] {
            node.add_child(label);
        }

        let mut labels: Vec<char> = node.get_children().map(|(label, _)| label).collect();
        labels.sort_unstable();
        assert_eq!(labels, vec!['x', 'y', 'z']);
        assert!(node.get_child('w').is_none());
    }

    #[test]
    fn test_remove_child_transfers_subtree() {
        let mut node = TrieNode::new();
        node.add_child('a').add_child('b').add_child('c');

        let detached = node.remove_child('a').unwrap();
        assert!(node.is_leaf());
        assert!(detached.get_child('b').and_then(|b| b.get_child('c')).is_some());

        assert!(node.remove_child('a').is_none());
    }

    #[test]
    fn test_deep_chain_drops_without_overflow() {
        let mut root = TrieNode::new();
        let mut cursor = &mut root;
        for _ in 0..200_000 {
            cursor = cursor.add_child('a');
        }
        drop(root);
    }
}
