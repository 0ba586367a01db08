//! Records produced by one run, split by relationship.

use super::{GenerationOutcome, OutputRecord, Relationship};

/// All records emitted by one run. Returned as a whole, so a run's output is
/// either observed completely or not at all.
#[derive(Debug, Clone)]
pub struct RoutedRecords {
  /// Records routed to [Relationship::Success], in array order.
  pub success: Vec<OutputRecord>,
  /// Records routed to [Relationship::Failed].
  pub failed: Vec<OutputRecord>,
  /// How the run ended.
  pub outcome: GenerationOutcome,
}

impl RoutedRecords {
  pub fn new(outcome: GenerationOutcome) -> Self {
    Self {
      success: Vec::new(),
      failed: Vec::new(),
      outcome,
    }
  }

  /// Routes `record` to `relationship`.
  pub fn transfer(&mut self, record: OutputRecord, relationship: Relationship) {
    match relationship {
      Relationship::Success => self.success.push(record),
      Relationship::Failed => self.failed.push(record),
    }
  }

  pub fn records(&self, relationship: Relationship) -> &[OutputRecord] {
    match relationship {
      Relationship::Success => &self.success,
      Relationship::Failed => &self.failed,
    }
  }

  pub fn success_count(&self) -> usize {
    self.success.len()
  }
}
