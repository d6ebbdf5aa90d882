//! Tests for loading session configuration from disk.

use std::io::Write;
use strictly_rematch::{SessionConfig, Symbol};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "player_x = \"Ada\"").unwrap();
    writeln!(file, "player_o = \"Grace\"").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let config = SessionConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.log_filter(), "debug");

    let registry = config.registry();
    assert_eq!(registry.name(Symbol::X), "Ada");
    assert_eq!(registry.name(Symbol::O), "Grace");
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    let config = SessionConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "player_x = ").unwrap();

    let err = SessionConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
