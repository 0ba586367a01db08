//! Tests for `UuidRecordFactory`.

use std::collections::{HashMap, HashSet};

use crate::factory::{RecordFactory, UuidRecordFactory};

#[test]
fn create_attaches_attributes() {
  let mut attrs = HashMap::new();
  attrs.insert("env".to_string(), "prod".to_string());
  let record = UuidRecordFactory.create(attrs.clone());
  assert_eq!(record.attributes, attrs);
}

#[test]
fn identities_are_distinct() {
  let ids: HashSet<_> = (0..100)
    .map(|_| UuidRecordFactory.create(HashMap::new()).id)
    .collect();
  assert_eq!(ids.len(), 100);
}
