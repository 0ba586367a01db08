//! Record emitted by the stage: an identity plus an attribute map.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AttributeMap;

/// Identity of one generated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(Uuid);

impl RecordId {
  /// Fresh random (v4) identity.
  pub fn new_v4() -> Self {
    Self(Uuid::new_v4())
  }

  pub fn as_uuid(&self) -> &Uuid {
    &self.0
  }
}

impl From<Uuid> for RecordId {
  fn from(id: Uuid) -> Self {
    Self(id)
  }
}

impl fmt::Display for RecordId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "record-{}", self.0)
  }
}

/// A generated record. Not mutated once routed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
  /// Unique identity.
  pub id: RecordId,
  /// Merged static and per-element attributes.
  pub attributes: AttributeMap,
  /// When the record was created.
  pub created_at: DateTime<Utc>,
}

impl OutputRecord {
  pub fn new(id: RecordId, attributes: AttributeMap) -> Self {
    Self {
      id,
      attributes,
      created_at: Utc::now(),
    }
  }

  /// Value of one attribute, if present.
  pub fn attribute(&self, key: &str) -> Option<&str> {
    self.attributes.get(key).map(String::as_str)
  }
}
