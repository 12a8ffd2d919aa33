//! Test modules for Moana Index.
//!
//! Cross-component suites live here; unit tests stay next to the code they
//! cover:
//! - Property-based tests of the suffix trie using proptest
//! - Worked examples as test-case tables
//! - Configuration loading and error reporting tests

pub mod config_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::create_test_dir;
