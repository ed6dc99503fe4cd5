//! Integration tests for config loading from fixture files.
//!
//! These tests verify that the config module can parse the sample config file correctly.

use std::fs;
use std::path::Path;

use rename_tools::clean_name::{CleanNameConfig, CleanNameFileConfig};

/// Read the sample config file content.
fn read_sample_config() -> String {
    let config_path = Path::new("tests/fixtures/sample_config.toml");
    fs::read_to_string(config_path).expect("Failed to read sample config file")
}

#[test]
fn sample_config_file_exists() {
    let config_path = Path::new("tests/fixtures/sample_config.toml");
    assert!(config_path.exists(), "Sample config file should exist");
}

#[test]
fn sample_config_is_valid_toml() {
    let config_content = read_sample_config();
    let result: Result<toml::Value, _> = toml::from_str(&config_content);
    assert!(result.is_ok(), "Sample config should be valid TOML: {:?}", result.err());
}

#[test]
fn clean_name_section_has_expected_structure() {
    let config_content = read_sample_config();
    let value: toml::Value = toml::from_str(&config_content).expect("should parse");

    let section = value.get("clean_name").expect("should have clean_name section");

    for key in ["debug", "dryrun", "max_errors", "overwrite", "verbose", "yes"] {
        assert!(section.get(key).is_some(), "clean_name section should have '{key}'");
    }
}

#[test]
fn sample_config_parses_into_clean_name_config() {
    let config_content = read_sample_config();
    let file_config = CleanNameFileConfig::from_toml_str(&config_content).expect("should parse");
    assert_eq!(file_config.max_errors, Some(10));
    assert!(file_config.verbose);

    let config = CleanNameConfig::from(file_config);
    assert_eq!(config.max_errors, 10);
    assert!(config.verbose);
    assert!(!config.overwrite);
    assert!(!config.dryrun);
}
