use banksim_core::config::loader::{ConfigError, ConfigLoader};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn missing_explicit_file_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("nope/config.toml");
    let err = ConfigLoader::load(Some(&cfg_path)).unwrap_err();
    match err {
        ConfigError::NotFound(_) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn bad_version_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 2\n");

    let err = ConfigLoader::load(Some(&cfg_path)).unwrap_err();
    match err {
        ConfigError::BadVersion(2) => {}
        other => panic!("expected BadVersion(2), got {other:?}"),
    }
}

#[test]
fn malformed_toml_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n[engine\ndelay_ms = 5\n");

    let err = ConfigLoader::load(Some(&cfg_path)).unwrap_err();
    match err {
        ConfigError::ParseError(path, _) => assert!(path.ends_with("config.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn unknown_key_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\nprofile = \"default\"\n");

    let err = ConfigLoader::load(Some(&cfg_path)).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(..)), "got {err:?}");
}
