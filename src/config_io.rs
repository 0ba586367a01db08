//! Stage config save/load (JSON).

use std::path::Path;

use tracing::instrument;

use crate::config::StageConfig;
use crate::error::ConfigError;

/// Default filename for a stage config under a pipeline directory.
pub const STAGE_CONFIG_FILENAME: &str = "generate_records.json";

/// Saves `config` to `path` as pretty JSON, creating parent directories.
#[instrument(level = "trace", skip(path, config))]
pub fn save_stage_config(path: &Path, config: &StageConfig) -> Result<(), ConfigError> {
  let json = serde_json::to_string_pretty(config)?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, json)?;
  Ok(())
}

/// Loads and validates a stage config from `path`.
#[instrument(level = "trace", skip(path))]
pub fn load_stage_config(path: &Path) -> Result<StageConfig, ConfigError> {
  let bytes = std::fs::read(path)?;
  let config: StageConfig = serde_json::from_slice(&bytes)?;
  config.validate()?;
  Ok(config)
}
