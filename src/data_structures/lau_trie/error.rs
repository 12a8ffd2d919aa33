// Copyright (c) 2025 Moana Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lau suffix trie.

/// Errors that can occur in Lau trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LauTrieError {
    /// An inserted string or a query contains one of the reserved sentinels.
    #[error("Reserved character {character:?} found at position {position}")]
    ReservedCharacter {
        /// The offending character.
        character: char,
        /// Character offset within the string.
        position: usize,
    },

    /// Initiator and delimiter must be distinct characters.
    #[error("Initiator and delimiter must differ, both are {0:?}")]
    InvalidSentinels(char),

    /// The inserted string is longer than the configured limit.
    #[error("String of {length} characters exceeds the limit of {max_chars}")]
    StringTooLong {
        /// Length of the rejected string in characters.
        length: usize,
        /// The configured maximum.
        max_chars: usize,
    },

    /// Every unique terminator has been handed out.
    #[error("Terminator space exhausted after {0} insertions")]
    CapacityExceeded(u64),

    /// The query does not occur in the trie.
    #[error("Substring not found: {0}")]
    NotFound(String),

    /// No strings have been inserted yet.
    #[error("Trie is empty")]
    Empty,

    /// The trie holds strings but none of them contributes a candidate character.
    #[error("No candidate characters for {0}")]
    NoCandidates(&'static str),
}
