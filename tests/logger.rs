use std::fs;

use log::{Level, LevelFilter, Log, Record};
use truckbook::config::LoggingConfig;
use truckbook::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    let config = LoggingConfig {
        enabled: false,
        ..Default::default()
    };
    let logger = Logger::from_config(&config).unwrap();
    assert!(!logger.is_enabled());
    assert!(!logger.has_file_writer());
    assert_eq!(logger.level(), LevelFilter::Off);
}

#[test]
fn test_invalid_level_is_rejected() {
    let config = LoggingConfig {
        level: "shouty".to_string(),
        ..Default::default()
    };
    assert!(Logger::from_config(&config).is_err());
}

#[test]
fn test_config_based_logging_to_file() {
    let log_path = std::env::temp_dir()
        .join(format!("truckbook-log-{}", uuid::Uuid::new_v4()))
        .join("truckbook.log");
    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
        file: Some(log_path.clone()),
    };

    let logger = Logger::from_config(&config).unwrap();
    assert!(logger.is_enabled());
    assert!(logger.has_file_writer());

    let (level, sink) = logger.dispatch().unwrap().into_log();
    assert_eq!(level, LevelFilter::Debug);

    sink.log(
        &Record::builder()
            .args(format_args!("Test message with file"))
            .level(Level::Info)
            .target("truckbook")
            .build(),
    );
    sink.log(
        &Record::builder()
            .args(format_args!("too detailed"))
            .level(Level::Trace)
            .target("truckbook")
            .build(),
    );
    sink.flush();

    let file_content = fs::read_to_string(&log_path).unwrap();
    assert!(file_content.contains("Test message with file"));
    assert!(file_content.contains("INFO"));
    assert!(!file_content.contains("too detailed"));

    // Clean up test file
    if let Some(parent) = log_path.parent() {
        let _ = fs::remove_dir_all(parent);
    }
}

#[test]
fn test_log_file_path() {
    if let Ok(path) = Logger::get_log_file_path() {
        assert!(path.ends_with("truckbook/truckbook.log"));
    }
}
