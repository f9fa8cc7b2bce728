use banksim_core::config::loader::ConfigLoader;
use banksim_core::config::types::ConfigSource;
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
fn load_minimal_uses_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n");

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert_eq!(rc.source, ConfigSource::File(cfg_path.clone()));
    assert_eq!(rc.engine.delay_ms, 500);
    assert_eq!(rc.logging.level, "info");
    assert!(rc.logging.file.is_none());
    assert!(rc.curriculum_path.is_none());
}

#[test]
fn load_full_config_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("banksim/config.toml");
    let curriculum = tmp.path().join("course.toml");
    let toml = format!(
        r#"
version = 1
curriculum = "{}"

[engine]
delay_ms = 0

[logging]
level = "warn"
file_level = "debug"
file = "{}"
"#,
        curriculum.display(),
        tmp.path().join("bsim.log").display()
    );
    write_file(&cfg_path, &toml);

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert_eq!(rc.engine.delay_ms, 0);
    assert_eq!(rc.logging.level, "warn");
    assert_eq!(rc.logging.file_level.as_deref(), Some("debug"));
    assert!(rc.logging.file.as_ref().unwrap().ends_with("bsim.log"));
    assert_eq!(rc.curriculum_path.as_deref(), Some(curriculum.as_path()));
}

#[test]
fn configured_curriculum_is_loaded() {
    let tmp = tempdir().unwrap();
    let course = tmp.path().join("course.toml");
    write_file(
        &course,
        r#"
[[units]]
id = "only"
title = "Only Unit"
description = "one unit"

[[units.modules]]
id = "rbi-functions"
title = "Reserves"
unit = "Unit I"
description = "reserve ratios"
"#,
    );
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, &format!("version = 1\ncurriculum = \"{}\"\n", course.display()));

    let rc = ConfigLoader::load(Some(&cfg_path)).unwrap();
    let catalog = rc.catalog().expect("curriculum should load");
    assert_eq!(catalog.units().len(), 1);
    assert!(catalog.module("rbi-functions").is_some());
}

#[test]
fn defaults_give_builtin_catalog() {
    let rc = banksim_core::config::types::ResolvedConfig::default();
    assert_eq!(rc.source, ConfigSource::Defaults);
    assert_eq!(rc.catalog().unwrap().units().len(), 5);
}
