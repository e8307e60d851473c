//! Tests for config loading: defaults, partial files, malformed input.

use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn defaults_are_permissive() {
    let config = Config::default();
    assert!(!config.disable_shortcuts);
    assert!(config.platform.is_none());
    assert!(config.log_filter.is_none());
}

#[test]
fn reads_a_full_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "disable_shortcuts": true,
            "platform": "mac",
            "log_filter": "command_kit=trace"
        }"#,
    )
    .unwrap();

    let config = read_config(&path).unwrap();
    assert!(config.disable_shortcuts);
    assert_eq!(config.platform, Some(Platform::MacLike));
    assert_eq!(config.log_filter.as_deref(), Some("command_kit=trace"));
}

#[test]
fn partial_files_keep_remaining_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"disable_shortcuts": true}"#).unwrap();

    let config = load_config_from(&path);
    assert!(config.disable_shortcuts);
    assert!(config.platform.is_none());
    assert!(config.log_filter.is_none());
}

#[test]
fn missing_file_degrades_to_defaults() {
    let dir = tempdir().unwrap();
    let config = load_config_from(&dir.path().join("nope.json"));
    assert_eq!(config, Config::default());
}

#[test]
fn malformed_file_degrades_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{not json at all").unwrap();

    assert!(read_config(&path).is_err());
    assert_eq!(load_config_from(&path), Config::default());
}

#[test]
fn unknown_platform_string_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"platform": "amiga"}"#).unwrap();
    assert!(read_config(&path).is_err());
}

#[test]
fn platform_names_round_trip() {
    for (platform, name) in [
        (Platform::MacLike, "\"mac\""),
        (Platform::Windows, "\"windows\""),
        (Platform::Other, "\"other\""),
    ] {
        assert_eq!(serde_json::to_string(&platform).unwrap(), name);
        assert_eq!(serde_json::from_str::<Platform>(name).unwrap(), platform);
    }
}

#[test]
fn env_values_that_disable() {
    assert!(disable_from_env("1"));
    assert!(disable_from_env("true"));
    assert!(disable_from_env("TRUE"));
    assert!(disable_from_env(" true "));
    assert!(!disable_from_env("0"));
    assert!(!disable_from_env("false"));
    assert!(!disable_from_env(""));
    assert!(!disable_from_env("yes"));
}

#[test]
fn config_serialization_skips_empty_options() {
    let rendered = serde_json::to_string(&Config::default()).unwrap();
    assert_eq!(rendered, r#"{"disable_shortcuts":false}"#);
}
