use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use mdpdf_engine::{config_home_from, Config, ConfigError, ConfigStore};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn missing_file_means_first_run() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::at(temp.path().join("config.toml"));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn saved_endpoint_reloads() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::at(temp.path().join("markdown-to-pdf").join("config.toml"));

    store
        .save(&Config::with_endpoint("http://example.com:9000"))
        .unwrap();

    let loaded = store.load().unwrap().expect("config present");
    assert_eq!(loaded.endpoint(), "http://example.com:9000");
}

#[test]
fn file_uses_gotenberg_table() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    let store = ConfigStore::at(&path);
    store.save(&Config::with_endpoint("http://localhost:3000")).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[gotenberg]"));
    assert!(text.contains("endpoint = \"http://localhost:3000\""));
}

#[test]
fn hand_written_file_is_accepted() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[gotenberg]\nendpoint = \"https://pdf.internal\"\n").unwrap();

    let config = ConfigStore::at(&path).load().unwrap().unwrap();
    assert_eq!(config, Config::with_endpoint("https://pdf.internal"));
}

#[test]
fn malformed_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[gotenberg\nendpoint = ").unwrap();

    let err = ConfigStore::at(&path).load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_endpoint_key_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[gotenberg]\n").unwrap();

    assert!(ConfigStore::at(&path).load().is_err());
}

#[test]
fn xdg_config_home_wins_over_home() {
    let home = config_home_from(
        Some(OsString::from("/xdg")),
        Some(PathBuf::from("/home/user")),
    )
    .unwrap();
    assert_eq!(home, PathBuf::from("/xdg"));
}

#[test]
fn empty_xdg_falls_back_to_dot_config() {
    let home = config_home_from(Some(OsString::new()), Some(PathBuf::from("/home/user"))).unwrap();
    assert_eq!(home, PathBuf::from("/home/user/.config"));

    let home = config_home_from(None, Some(PathBuf::from("/home/user"))).unwrap();
    assert_eq!(home, PathBuf::from("/home/user/.config"));
}

#[test]
fn no_home_at_all_is_an_error() {
    assert!(matches!(
        config_home_from(None, None),
        Err(ConfigError::NoHomeDir)
    ));
}
