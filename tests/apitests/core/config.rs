use log::LevelFilter;
use phonebook::{
    config::Config,
    configuration,
    SourceResolver,
};
use crate::fixture_path;

/**
# default_configuration::Builder
 - new
 - with_device_id
 - with_primary_path
 - with_backup_path
 - with_performance_count
 - with_logger
 - load
 - build

# trait Config
 - device_id
 - primary_path
 - backup_path
 - performance_count
 - log_level
 - log_file
 */
#[test]
fn test_build_cfg() {
    let cfg: Box<dyn Config>;

    cfg = configuration::Builder::new()
        .with_device_id("061-123456")
        .with_primary_path("primary.xlsx")
        .with_backup_path("backup.csv")
        .with_performance_count(500)
        .with_logger(LevelFilter::Debug, Some("phonebook.log"))
        .build()
        .map_err(|_| assert!(false))
        .unwrap();

    assert_eq!(cfg.device_id(), "061-123456");
    assert_eq!(cfg.primary_path(), "primary.xlsx");
    assert_eq!(cfg.backup_path(), "backup.csv");
    assert_eq!(cfg.performance_count(), 500);
    assert_eq!(cfg.log_level(), LevelFilter::Debug);
    assert_eq!(cfg.log_file(), Some("phonebook.log"));

    #[cfg(feature = "inspect")]
    cfg.dump();
}

#[test]
fn test_load_cfg() {
    let cfg = configuration::Builder::new()
        .load(&fixture_path("core/apitests1.conf"))
        .map_err(|_| assert!(false))
        .unwrap()
        .build()
        .map_err(|_| assert!(false))
        .unwrap();

    #[cfg(feature = "inspect")]
    cfg.dump();

    assert_eq!(cfg.device_id(), "061-999888");
    assert_eq!(cfg.primary_path(), "tests/apitests/data/contacts.xlsx");
    assert_eq!(cfg.backup_path(), "tests/apitests/data/contacts.csv");
    assert_eq!(cfg.performance_count(), 25);
    assert_eq!(cfg.log_level(), LevelFilter::Warn);
    assert_eq!(cfg.log_file(), Some("apitests1.log"));
}

#[test]
fn test_resolver_from_cfg() {
    let primary = fixture_path("data/missing.xlsx");
    let backup = fixture_path("data/contacts.csv");
    let cfg = configuration::Builder::new()
        .with_device_id("061-123456")
        .with_primary_path(&primary)
        .with_backup_path(&backup)
        .with_performance_count(12)
        .build()
        .unwrap();

    let resolver = SourceResolver::from_config(cfg.as_ref());
    assert_eq!(resolver.performance_count(), 12);
    assert_eq!(resolver.data_source(), backup);
    assert_eq!(resolver.scenario("performance").len(), 12);
}
