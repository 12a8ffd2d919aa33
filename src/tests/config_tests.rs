//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, MoanaConfig, Validate};
use crate::error::config::ConfigError;
use crate::tests::create_test_dir;
use std::fs;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = MoanaConfig::default();
    assert!(config.validate().is_ok());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = MoanaConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.trie.delimiter = "#".to_string();
    assert!(config.validate().is_err());

    config.trie.delimiter = "|".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("moana.toml");

    let config_content = r#"
    [trie]
    initiator = "^"
    delimiter = "|"
    max_string_chars = 64

    [corpus]
    trim = false
    skip_blank = true

    [log]
    level = "debug"
    "#;
    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.trie.initiator, "^");
    assert_eq!(config.trie.delimiter, "|");
    assert_eq!(config.trie.max_string_chars, Some(64));
    assert!(!config.corpus.trim);
    assert!(config.corpus.skip_blank);
    assert_eq!(config.log.level, "debug");
    // Untouched values keep their defaults.
    assert!(config.log.source_location);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("moana.json");
    fs::write(&config_path, r#"{ "trie": { "delimiter": "~" } }"#).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    assert_eq!(config.trie.delimiter, "~");
    assert_eq!(config.trie.initiator, "#");
}

/// Test that environment variables override file values.
#[test]
fn test_environment_override() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("env.toml");
    fs::write(&config_path, "[log]\nlevel = \"warn\"\n").unwrap();

    std::env::set_var("TEST_ENV__LOG__LEVEL", "trace");
    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV").load().unwrap();
    std::env::remove_var("TEST_ENV__LOG__LEVEL");

    assert_eq!(config.log.level, "trace");
}

/// Test that invalid configuration files are rejected.
#[test]
fn test_invalid_config_rejected() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("invalid.toml");
    fs::write(&config_path, "[trie]\ninitiator = \"ab\"\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::InvalidValueType { .. })
    ));
}

/// Test that missing files and unknown formats are reported.
#[test]
fn test_missing_and_unsupported_files() {
    let dir = create_test_dir().unwrap();

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        ConfigLoader::new(Some(&missing), "TEST_MISSING").load(),
        Err(ConfigError::FileNotFound(_))
    ));

    let unsupported = dir.path().join("config.ini");
    fs::write(&unsupported, "").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&unsupported), "TEST_MISSING").load(),
        Err(ConfigError::ParseError(_))
    ));
}

/// Test that the default configuration round-trips through TOML.
#[test]
fn test_default_config_toml_round_trip() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("generated.toml");
    let toml = toml::to_string_pretty(&MoanaConfig::default()).unwrap();
    fs::write(&config_path, toml).unwrap();

    let loaded = ConfigLoader::new(Some(&config_path), "TEST_ROUND_TRIP").load().unwrap();
    assert_eq!(loaded, MoanaConfig::default());
}
