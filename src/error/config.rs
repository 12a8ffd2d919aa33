//! Configuration error module.
//!
//! Failures raised while layering defaults, a config file and `MOANA__*`
//! environment overrides into a [`MoanaConfig`](crate::config::MoanaConfig).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`ConfigLoader`](crate::config::ConfigLoader) and the
/// section validators.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `--config` path does not exist.
    #[error("Config file {0} does not exist")]
    FileNotFound(PathBuf),

    /// The file or an environment override could not be read into the
    /// config sections, or the file extension is not toml, json or yaml.
    #[error("Cannot read configuration: {0}")]
    ParseError(String),

    /// A section is well formed but inconsistent, such as an initiator equal
    /// to the delimiter.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// A value has the wrong shape, such as a sentinel that is not exactly
    /// one character.
    #[error("Setting {key} must be {expected}, found {actual}")]
    InvalidValueType {
        /// Dotted setting name, e.g. `trie.delimiter`
        key: String,
        /// Accepted shape
        expected: String,
        /// What was supplied
        actual: String,
    },

    /// A numeric setting is outside its accepted range.
    #[error("Setting {key} is out of range: {message}")]
    ValueOutOfRange {
        /// Dotted setting name, e.g. `trie.max_string_chars`
        key: String,
        /// Accepted range
        message: String,
    },
}
