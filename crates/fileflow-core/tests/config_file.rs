use std::io::Write;

use fileflow_core::{ConfigError, FileFlowConfig};

#[test]
fn loads_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
dashboard:
  host: 0.0.0.0
  port: 9100
  auth:
    enabled: true
    users:
      - username: admin
        password: admin
table:
  page_size: 25
mock:
  seed: 1234
  loading_delay_ms: 0
logging:
  level: debug
"#
    )
    .unwrap();

    let config = FileFlowConfig::from_file(file.path()).unwrap();
    assert_eq!(config.dashboard.bind_addr(), "0.0.0.0:9100");
    assert_eq!(config.table.page_size, 25);
    assert_eq!(config.mock.seed, 1234);
    assert_eq!(config.mock.loading_delay_ms, 0);
    assert_eq!(config.logging.level, "debug");
    assert!(config.dashboard.auth.check_credentials("admin", "admin"));
    assert!(!config.dashboard.auth.check_credentials("admin", "nope"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileFlowConfig::from_file(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn sample_config_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../fileflow.yaml");
    let config = FileFlowConfig::from_file(path).unwrap();
    assert_eq!(config.table.page_size, 10);
}
