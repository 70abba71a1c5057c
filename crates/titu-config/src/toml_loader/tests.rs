//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_titu_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, titu_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[chat]
typing_delay_ms = 250

[webhook]
url = "https://hooks.example.com/chat"
auth_scheme = "bearer"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chat.typing_delay_ms, 250);
    assert_eq!(config.webhook.url, "https://hooks.example.com/chat");
    // Defaults preserved
    assert_eq!(config.chat.idle_interval_ms, 6000);
    assert_eq!(config.leads.table, "Leads");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, titu_common::ConfigError::ParseError(_)));
}

#[test]
fn loader_parses_without_range_checks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[chat]
typing_delay_ms = 90000
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chat.typing_delay_ms, 90000);

    let err = crate::load_config(Some(&path)).unwrap_err();
    assert!(matches!(err, titu_common::ConfigError::ValidationError(ref m) if m.contains("typing_delay_ms")));
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("titu").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chat.typing_delay_ms, 2000);
    assert!(config.webhook.url.is_empty());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::TituConfig;

    let content = default_config_toml();
    let config: TituConfig = toml::from_str(&content).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("titu"));
        assert!(path_str.ends_with("config.toml"));
    }
}
