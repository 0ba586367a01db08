//! Stage configuration: the markets JSON property plus user-defined dynamic properties.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the property holding the markets JSON array.
pub const MARKETS_JSON: &str = "MARKETS_JSON";

/// Describes one supported configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
  pub name: &'static str,
  pub display_name: &'static str,
  pub description: &'static str,
  pub required: bool,
}

/// Descriptor for [MARKETS_JSON].
pub const MARKETS_JSON_DESCRIPTOR: PropertyDescriptor = PropertyDescriptor {
  name: MARKETS_JSON,
  display_name: "Markets",
  description: "JSON array with Markets attributes",
  required: true,
};

/// A user-defined property copied onto every generated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicProperty {
  /// Attribute name on the generated records.
  pub name: String,
  /// Configured (unresolved) value.
  pub value: String,
}

impl DynamicProperty {
  pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      value: value.into(),
    }
  }
}

/// Configuration for one generate-records stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
  /// Configured (unresolved) markets JSON.
  pub markets_json: String,
  /// Dynamic properties in configuration order.
  #[serde(default)]
  pub dynamic_properties: Vec<DynamicProperty>,
}

impl StageConfig {
  pub fn new(markets_json: impl Into<String>) -> Self {
    Self {
      markets_json: markets_json.into(),
      dynamic_properties: Vec::new(),
    }
  }

  /// Adds a dynamic property.
  pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self
      .dynamic_properties
      .push(DynamicProperty::new(name, value));
    self
  }

  /// Builds a config from a flat property bag. [MARKETS_JSON] is taken out;
  /// every other entry becomes a dynamic property, in iteration order.
  pub fn from_properties<I, K, V>(properties: I) -> Result<Self, ConfigError>
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    let mut markets_json = None;
    let mut dynamic_properties = Vec::new();
    for (name, value) in properties {
      let name = name.into();
      if name == MARKETS_JSON {
        markets_json = Some(value.into());
      } else {
        dynamic_properties.push(DynamicProperty::new(name, value));
      }
    }
    let markets_json =
      markets_json.ok_or_else(|| ConfigError::MissingProperty(MARKETS_JSON.to_string()))?;
    let config = Self {
      markets_json,
      dynamic_properties,
    };
    config.validate()?;
    Ok(config)
  }

  /// Checks that [MARKETS_JSON] is non-empty (whitespace counts as content) and
  /// dynamic property names are non-empty, unique and not reserved.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.markets_json.is_empty() {
      return Err(ConfigError::EmptyProperty(MARKETS_JSON.to_string()));
    }
    let mut seen = HashSet::new();
    for property in &self.dynamic_properties {
      if property.name.is_empty() {
        return Err(ConfigError::EmptyPropertyName);
      }
      if property.name == MARKETS_JSON {
        return Err(ConfigError::ReservedPropertyName(property.name.clone()));
      }
      if !seen.insert(property.name.as_str()) {
        return Err(ConfigError::DuplicateProperty(property.name.clone()));
      }
    }
    Ok(())
  }
}
