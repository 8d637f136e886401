use truckbook::config::Config;
use truckbook::constants::{DEFAULT_OTP_LENGTH, DEFAULT_OTP_TTL_MINUTES};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.database.url.starts_with("sqlite://"));
    assert!(config.database.url.ends_with("?mode=rwc"));
    assert!(!config.database.sql_logging);
    assert_eq!(config.registration.otp_length, DEFAULT_OTP_LENGTH);
    assert_eq!(config.registration.otp_ttl_minutes, DEFAULT_OTP_TTL_MINUTES);
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // OTP length out of range should fail
    config.registration.otp_length = 2;
    assert!(config.validate().is_err());

    // Reset and test an unbounded OTP lifetime
    config.registration.otp_length = 6;
    config.registration.otp_ttl_minutes = 2000;
    assert!(config.validate().is_err());

    config.registration.otp_ttl_minutes = 10;
    config.database.url = "postgres://localhost/truckbook".to_string();
    assert!(config.validate().is_err());

    config.database.url = "sqlite::memory:".to_string();
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("otp_length = 6"));
    assert!(toml_str.contains("level = \"info\""));
    assert!(toml_str.contains("[database]"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[database]
url = "sqlite::memory:"

[logging]
level = "debug"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.database.url, "sqlite::memory:");
    assert_eq!(config.logging.level, "debug");

    // Check that unspecified values use defaults
    assert_eq!(config.database.max_connections, Config::default().database.max_connections);
    assert_eq!(config.registration.otp_length, DEFAULT_OTP_LENGTH);
    assert!(config.logging.enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_database_file_path() {
    let mut config = Config::default();

    config.database.url = "sqlite://data/truckbook.db?mode=rwc".to_string();
    assert_eq!(
        config.database.file_path(),
        Some(std::path::PathBuf::from("data/truckbook.db"))
    );

    config.database.url = "sqlite::memory:".to_string();
    assert_eq!(config.database.file_path(), None);
}

#[test]
fn test_generate_and_load_config() {
    let dir = std::env::temp_dir().join(format!("truckbook-config-{}", uuid::Uuid::new_v4()));
    let path = dir.join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Truckbook Configuration File"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.registration.otp_length, DEFAULT_OTP_LENGTH);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_load_rejects_invalid_file() {
    let dir = std::env::temp_dir().join(format!("truckbook-config-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "[registration]\notp_length = 42\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());

    let _ = std::fs::remove_dir_all(&dir);
}
