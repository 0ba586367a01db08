//! Output channels a generated record can be routed to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two fixed output channels of the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
  Success,
  Failed,
}

impl Relationship {
  /// Both relationships, in port order.
  pub const ALL: [Relationship; 2] = [Relationship::Success, Relationship::Failed];

  /// Port / relationship name.
  pub fn name(self) -> &'static str {
    match self {
      Relationship::Success => "success",
      Relationship::Failed => "failed",
    }
  }

  pub fn description(self) -> &'static str {
    match self {
      Relationship::Success => "Generated records are routed to this relationship",
      Relationship::Failed => {
        "A failure to generate records from the markets JSON routes a single record here"
      }
    }
  }

  /// Looks up a relationship by its port name.
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|r| r.name() == name)
  }
}

impl fmt::Display for Relationship {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
