// Copyright (c) 2025 Moana Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-shareable handle around a [`LauTrie`].
//!
//! Node creation is not atomic, so insertions are serialized behind the write
//! half of a `parking_lot::RwLock` while any number of readers query in
//! parallel.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{LauTrie, LauTrieResult};

/// A cloneable, single-writer/multi-reader handle to a [`LauTrie`].
#[derive(Debug, Clone, Default)]
pub struct SharedLauTrie {
    inner: Arc<RwLock<LauTrie>>,
}

impl SharedLauTrie {
    /// Wraps an existing trie.
    pub fn new(trie: LauTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Adds a string under the write lock.
    pub fn add<S: AsRef<str>>(&self, s: S) -> LauTrieResult<()> {
        self.inner.write().add(s)
    }

    /// Runs `f` against the trie under a read lock.
    pub fn read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&LauTrie) -> R,
    {
        f(&self.inner.read())
    }

    /// Recovers the trie once this is the last handle, or returns the handle.
    pub fn into_inner(self) -> Result<LauTrie, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl From<LauTrie> for SharedLauTrie {
    fn from(trie: LauTrie) -> Self {
        Self::new(trie)
    }
}
