//! Creates output records with fresh identities.

use crate::types::{AttributeMap, OutputRecord, RecordId};

/// Creates one record per call. Never fails.
pub trait RecordFactory: Send + Sync {
  /// Creates a record carrying `attributes` with an identity no other record shares.
  fn create(&self, attributes: AttributeMap) -> OutputRecord;
}

/// Identities are random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRecordFactory;

impl RecordFactory for UuidRecordFactory {
  fn create(&self, attributes: AttributeMap) -> OutputRecord {
    OutputRecord::new(RecordId::new_v4(), attributes)
  }
}
