//! Tests for `InvocationContext`.

use super::InvocationContext;

#[test]
fn default_is_empty() {
  let ctx = InvocationContext::default();
  assert!(ctx.attributes.is_empty());
  assert_eq!(ctx.get("anything"), None);
}

#[test]
fn with_attribute_overwrites() {
  let ctx = InvocationContext::default()
    .with_attribute("region", "EU")
    .with_attribute("region", "US");
  assert_eq!(ctx.get("region"), Some("US"));
  assert_eq!(ctx.attributes.len(), 1);
}
