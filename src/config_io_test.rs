//! Tests for stage config save/load.

use crate::config::StageConfig;
use crate::config_io::{STAGE_CONFIG_FILENAME, load_stage_config, save_stage_config};
use crate::error::ConfigError;

#[test]
fn save_then_load() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("nested").join(STAGE_CONFIG_FILENAME);
  let config = StageConfig::new(r#"[{"id":"${market}"}]"#).with_property("env", "prod");
  save_stage_config(&path, &config).unwrap();
  assert!(path.exists());
  let loaded = load_stage_config(&path).unwrap();
  assert_eq!(loaded, config);
}

#[test]
fn load_missing_file_returns_io_error() {
  let dir = tempfile::tempdir().unwrap();
  let r = load_stage_config(&dir.path().join("nonexistent.json"));
  assert!(matches!(r, Err(ConfigError::Io(_))));
}

#[test]
fn load_invalid_json_returns_parse_error() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(STAGE_CONFIG_FILENAME);
  std::fs::write(&path, "{ not json").unwrap();
  assert!(matches!(load_stage_config(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn load_rejects_invalid_config() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(STAGE_CONFIG_FILENAME);
  std::fs::write(&path, r#"{"markets_json":""}"#).unwrap();
  assert!(matches!(
    load_stage_config(&path),
    Err(ConfigError::EmptyProperty(_))
  ));
}
