//! Index configuration module.
//!
//! Sentinels are written as one-character strings so they round-trip through
//! every configuration format and environment variables.

use super::{ConfigResult, Validate};
use crate::data_structures::lau_trie::{
    LauTrieConfig, DEFAULT_DELIMITER, DEFAULT_INITIATOR, DEFAULT_MAX_STRING_CHARS,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Suffix trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrieConfig {
    /// Sentinel marking string starts, exactly one character
    pub initiator: String,

    /// Sentinel opening string terminators, exactly one character
    pub delimiter: String,

    /// Longest accepted string in characters; absent for no limit
    pub max_string_chars: Option<usize>,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            initiator: DEFAULT_INITIATOR.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            max_string_chars: Some(DEFAULT_MAX_STRING_CHARS),
        }
    }
}

impl TrieConfig {
    /// Builds the trie configuration these settings describe.
    pub fn to_trie_config(&self) -> ConfigResult<LauTrieConfig> {
        let initiator = single_char("trie.initiator", &self.initiator)?;
        let delimiter = single_char("trie.delimiter", &self.delimiter)?;
        if initiator == delimiter {
            return Err(ConfigError::ValidationError(format!(
                "trie.initiator and trie.delimiter must differ, both are {initiator:?}"
            )));
        }
        Ok(LauTrieConfig {
            initiator,
            delimiter,
            max_string_chars: self.max_string_chars,
        })
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_string_chars == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_string_chars".to_string(),
                message: "must be greater than 0, omit it for no limit".to_string(),
            });
        }
        self.to_trie_config().map(|_| ())
    }
}

fn single_char(key: &str, value: &str) -> ConfigResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidValueType {
            key: key.to_string(),
            expected: "a single character".to_string(),
            actual: format!("{value:?}"),
        }),
    }
}
