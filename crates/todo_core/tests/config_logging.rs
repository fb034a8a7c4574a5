use todo_core::{logging_status, open_connection, ConfigError, CoreConfig, StorageConfig};

// Logging state is process-wide, so this binary holds the only test that
// starts it.
#[test]
fn core_config_starts_file_logging_and_opens_storage() {
    let log_dir = tempfile::tempdir().unwrap();
    let data_dir = tempfile::tempdir().unwrap();
    let config = CoreConfig {
        storage: StorageConfig::in_dir(data_dir.path()),
        log_level: "debug".to_string(),
        log_dir: Some(log_dir.path().to_path_buf()),
    };

    assert!(logging_status().is_none());
    config.validate().unwrap();
    config.init_logging().unwrap();
    config.init_logging().expect("same config should be idempotent");

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "debug");
    assert_eq!(dir, log_dir.path());

    let conflicting = CoreConfig {
        log_level: "error".to_string(),
        ..config.clone()
    };
    assert!(matches!(
        conflicting.init_logging(),
        Err(ConfigError::Logging(_))
    ));

    open_connection(&config.storage).unwrap();
    assert!(data_dir.path().join("todos.sqlite3").exists());
}

#[test]
fn config_without_log_dir_skips_logging() {
    let config = CoreConfig::default();
    config.init_logging().unwrap();
}
