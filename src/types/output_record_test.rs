//! Tests for `OutputRecord` and `RecordId`.

use std::collections::HashMap;

use super::{OutputRecord, RecordId};

#[test]
fn record_ids_are_unique() {
  let a = RecordId::new_v4();
  let b = RecordId::new_v4();
  assert_ne!(a, b);
}

#[test]
fn record_id_display_has_prefix() {
  let id = RecordId::new_v4();
  let s = id.to_string();
  assert!(s.starts_with("record-"));
  assert!(s.ends_with(&id.as_uuid().to_string()));
}

#[test]
fn attribute_lookup() {
  let mut attrs = HashMap::new();
  attrs.insert("env".to_string(), "prod".to_string());
  let record = OutputRecord::new(RecordId::new_v4(), attrs);
  assert_eq!(record.attribute("env"), Some("prod"));
  assert_eq!(record.attribute("missing"), None);
}

#[test]
fn serializes_attributes_and_id() {
  let mut attrs = HashMap::new();
  attrs.insert("id".to_string(), "1".to_string());
  let record = OutputRecord::new(RecordId::new_v4(), attrs);
  let json = serde_json::to_value(&record).unwrap();
  assert_eq!(json["attributes"]["id"], "1");
  assert_eq!(json["id"], record.id.as_uuid().to_string());
}
