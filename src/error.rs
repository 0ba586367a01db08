//! Error types for decoding, resolution, configuration and runs.

use thiserror::Error;

/// The markets JSON is not an array of flat, string-representable objects.
#[derive(Debug, Error)]
pub enum DecodeError {
  #[error("invalid json: {0}")]
  InvalidJson(#[from] serde_json::Error),

  #[error("expected a json array, found {found}")]
  NotAnArray { found: &'static str },

  #[error("element {index} is not an object (found {found})")]
  ElementNotObject { index: usize, found: &'static str },

  #[error("element {index} has a nested value for key '{key}'")]
  NestedValue { index: usize, key: String },

  #[error("element {index} has a null value for key '{key}'")]
  NullValue { index: usize, key: String },
}

/// A configured value could not be resolved for the current invocation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to resolve property '{key}': {reason}")]
pub struct ResolverError {
  pub key: String,
  pub reason: String,
}

impl ResolverError {
  pub fn new(key: impl Into<String>, reason: impl Into<String>) -> Self {
    Self {
      key: key.into(),
      reason: reason.into(),
    }
  }
}

/// Invalid stage configuration, detected at prepare / load time.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("required property '{0}' is missing")]
  MissingProperty(String),

  #[error("property '{0}' must not be empty")]
  EmptyProperty(String),

  #[error("dynamic property name must not be empty")]
  EmptyPropertyName,

  #[error("'{0}' is reserved and cannot be used as a dynamic property")]
  ReservedPropertyName(String),

  #[error("dynamic property '{0}' is configured more than once")]
  DuplicateProperty(String),

  #[error("failed to read or write config: {0}")]
  Io(#[from] std::io::Error),

  #[error("failed to parse config: {0}")]
  Parse(#[from] serde_json::Error),
}

/// Fatal failure of a run. No records are emitted.
#[derive(Debug, Error)]
pub enum GenerateError {
  #[error(transparent)]
  Resolve(#[from] ResolverError),
}
