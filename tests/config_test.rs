//! Tests for loading the TOML config file.

use std::io::Write;
use strictly_rewind::{MoveOrder, RewindConfig};

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = RewindConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, RewindConfig::default());
    assert_eq!(*config.sort_order(), MoveOrder::Ascending);
}

#[test]
fn test_file_values_are_read() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "sort_order = \"descending\"\nlog_file = \"game.log\"\nlog_filter = \"debug\""
    )
    .unwrap();

    let config = RewindConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.sort_order(), MoveOrder::Descending);
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sort_order = \"sideways\"").unwrap();

    let err = RewindConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
