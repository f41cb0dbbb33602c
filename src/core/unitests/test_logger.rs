use std::fs;
use log::{info, debug, error};
use serial_test::serial;
use tempfile::TempDir;

use crate::core::logger;

#[test]
#[serial]
fn test_logger() {
    logger::setup(log::LevelFilter::Info, None);
    info!("info: testing....");
    error!("error: testing...");
    assert!(log::log_enabled!(log::Level::Info));
    assert!(!log::log_enabled!(log::Level::Debug));
    logger::teardown();
}

#[test]
#[serial]
fn test_logger_to_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("unitests.log");

    logger::setup(log::LevelFilter::Debug, path.to_str());
    logger::revert_console_output();
    info!("info: written to file");
    debug!("debug: written to file");
    logger::teardown();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[INFO] info: written to file"));
    assert!(content.contains("[DEBUG] debug: written to file"));
}

#[test]
#[serial]
fn test_setup_after_teardown() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("resumed.log");

    logger::teardown();
    assert!(!log::log_enabled!(log::Level::Error));

    logger::setup(log::LevelFilter::Info, path.to_str());
    logger::revert_console_output();
    info!("info: resumed after teardown");
    logger::teardown();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[INFO] info: resumed after teardown"));
}
