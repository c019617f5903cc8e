//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{AyurConfig, LogLevel};
use ayursutra_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_ayursutra_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[assistant]
model = "gemini-1.5-flash"
temperature = 0.2

[logging]
level = "DEBUG"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.assistant.model, "gemini-1.5-flash");
    assert_eq!(config.assistant.temperature, 0.2);
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert_eq!(config.assistant.top_k, 40);
    assert_eq!(config.persona.name, "AyurSutra Assistant");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[assistant]
model = "custom"
top_k = 0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.assistant.model, "gemini-2.0-flash");
    assert_eq!(config.assistant.top_k, 40);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ayursutra").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.assistant.model, "gemini-2.0-flash");
    assert_eq!(config.persona.name, "AyurSutra Assistant");
}

#[test]
fn default_config_toml_is_valid() {
    let config: AyurConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.assistant.max_output_tokens, 1024);
}

#[test]
fn default_config_toml_has_no_api_key_field() {
    let content = default_config_toml();
    assert!(!content.contains("api_key ="));
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("ayursutra"));
        assert!(path_str.ends_with("config.toml"));
    }
}
