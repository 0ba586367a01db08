//! Per-invocation context handed to the attribute resolver.

use serde::{Deserialize, Serialize};

use super::AttributeMap;

/// Upstream attributes visible while resolving configured values for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvocationContext {
  pub attributes: AttributeMap,
}

impl InvocationContext {
  pub fn new(attributes: AttributeMap) -> Self {
    Self { attributes }
  }

  /// Returns a copy with `key` set to `value`.
  pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.attributes.insert(key.into(), value.into());
    self
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.attributes.get(key).map(String::as_str)
  }
}
