//! Decodes the markets JSON into one attribute map per array element.
//!
//! Scalars are coerced to strings: strings verbatim, numbers by their exact source
//! text (serde_json `arbitrary_precision`, so big integers keep every digit),
//! booleans as `true` / `false`. `null`, nested arrays and nested objects are not
//! representable as attributes. A single bad element fails the whole decode.

use serde_json::Value;
use tracing::instrument;

use crate::error::DecodeError;
use crate::types::AttributeMap;

/// Parses `raw` as a JSON array of flat objects, preserving array order.
///
/// `[]` decodes to an empty vector; it is not an error.
#[instrument(level = "trace", skip(raw), fields(len = raw.len()))]
pub fn decode_json_array(raw: &str) -> Result<Vec<AttributeMap>, DecodeError> {
  let root: Value = serde_json::from_str(raw)?;
  let elements = match root {
    Value::Array(elements) => elements,
    other => {
      return Err(DecodeError::NotAnArray {
        found: json_kind(&other),
      });
    }
  };
  elements
    .into_iter()
    .enumerate()
    .map(|(index, element)| decode_element(index, element))
    .collect()
}

/// Converts one array element into an attribute map.
pub(crate) fn decode_element(index: usize, element: Value) -> Result<AttributeMap, DecodeError> {
  let object = match element {
    Value::Object(object) => object,
    other => {
      return Err(DecodeError::ElementNotObject {
        index,
        found: json_kind(&other),
      });
    }
  };
  let mut attributes = AttributeMap::with_capacity(object.len());
  for (key, value) in object {
    let value = match value {
      Value::String(s) => s,
      Value::Number(n) => n.to_string(),
      Value::Bool(b) => b.to_string(),
      Value::Null => return Err(DecodeError::NullValue { index, key }),
      Value::Array(_) | Value::Object(_) => return Err(DecodeError::NestedValue { index, key }),
    };
    attributes.insert(key, value);
  }
  Ok(attributes)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}
