//! Corpus loading configuration module.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// How corpus files are split into strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Strip leading and trailing whitespace from every line
    pub trim: bool,

    /// Drop lines that are empty after trimming
    pub skip_blank: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            trim: true,
            skip_blank: false,
        }
    }
}

impl Validate for CorpusConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
