use std::fs;
use log::LevelFilter;
use tempfile::TempDir;

use crate::{
    Error,
    config::Config,
    configuration::{
        Builder,
        DEFAULT_PRIMARY_PATH,
        DEFAULT_BACKUP_PATH,
        DEFAULT_PERFORMANCE_COUNT,
    },
};

#[test]
fn test_build_defaults() {
    let cfg = Builder::new()
        .with_device_id("061-123456")
        .build()
        .unwrap();

    assert_eq!(cfg.device_id(), "061-123456");
    assert_eq!(cfg.primary_path(), DEFAULT_PRIMARY_PATH);
    assert_eq!(cfg.backup_path(), DEFAULT_BACKUP_PATH);
    assert_eq!(cfg.performance_count(), DEFAULT_PERFORMANCE_COUNT);
    assert_eq!(cfg.log_level(), LevelFilter::Info);
    assert_eq!(cfg.log_file(), None);
}

#[test]
fn test_build_missing_device() {
    assert!(matches!(Builder::new().build(), Err(Error::Argument(_))));
    assert!(matches!(Builder::new().with_device_id("  ").build(), Err(Error::Argument(_))));
}

#[test]
fn test_builder_overrides_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("phone.conf");
    fs::write(&path, r#"{
        "deviceId": "061-FILE",
        "primaryPath": "file-primary.csv",
        "backupPath": "file-backup.csv",
        "performanceCount": 50,
        "logger": { "level": "debug" }
    }"#).unwrap();

    let cfg = Builder::new()
        .load(path.to_str().unwrap())
        .unwrap()
        .with_primary_path("override.xlsx")
        .build()
        .unwrap();

    assert_eq!(cfg.device_id(), "061-FILE");
    assert_eq!(cfg.primary_path(), "override.xlsx");
    assert_eq!(cfg.backup_path(), "file-backup.csv");
    assert_eq!(cfg.performance_count(), 50);
    assert_eq!(cfg.log_level(), LevelFilter::Debug);
}

#[test]
fn test_load_errors() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing.conf");
    assert!(matches!(
        Builder::new().load(missing.to_str().unwrap()),
        Err(Error::Io(_))
    ));

    let broken = tmp.path().join("broken.conf");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(
        Builder::new().load(broken.to_str().unwrap()),
        Err(Error::Argument(_))
    ));
}
