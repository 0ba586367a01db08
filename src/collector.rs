//! Collects the static attributes attached to every generated record.

use tracing::{instrument, warn};

use crate::config::DynamicProperty;
use crate::resolver::AttributeResolver;
use crate::types::{AttributeMap, InvocationContext};

/// Resolves every dynamic property once. Properties whose value cannot be
/// resolved are skipped.
#[instrument(level = "trace", skip(properties, resolver, context), fields(count = properties.len()))]
pub fn collect_static_attributes(
  properties: &[DynamicProperty],
  resolver: &dyn AttributeResolver,
  context: &InvocationContext,
) -> AttributeMap {
  let mut attributes = AttributeMap::with_capacity(properties.len());
  for property in properties {
    match resolver.resolve(&property.name, &property.value, context) {
      Ok(value) => {
        attributes.insert(property.name.clone(), value);
      }
      Err(e) => {
        warn!(property = %property.name, error = %e, "skipping unresolved dynamic property");
      }
    }
  }
  attributes
}
