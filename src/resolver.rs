//! Resolution of configured property values into literal strings for one invocation.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::instrument;

use crate::error::ResolverError;
use crate::types::InvocationContext;

/// Turns a configured value into the literal string used for the current invocation.
pub trait AttributeResolver: Send + Sync {
  /// Resolves `value`, configured under property `name`, against `context`.
  fn resolve(
    &self,
    name: &str,
    value: &str,
    context: &InvocationContext,
  ) -> Result<String, ResolverError>;
}

impl<F> AttributeResolver for F
where
  F: Fn(&str, &str, &InvocationContext) -> Result<String, ResolverError> + Send + Sync,
{
  fn resolve(
    &self,
    name: &str,
    value: &str,
    context: &InvocationContext,
  ) -> Result<String, ResolverError> {
    self(name, value, context)
  }
}

/// Returns configured values unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralResolver;

impl AttributeResolver for LiteralResolver {
  fn resolve(
    &self,
    _name: &str,
    value: &str,
    _context: &InvocationContext,
  ) -> Result<String, ResolverError> {
    Ok(value.to_string())
  }
}

static PLACEHOLDER: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\$\{\s*([^}\s]+)\s*\}").expect("placeholder pattern is valid"));

/// Substitutes `${attribute}` placeholders with attributes of the invocation context.
///
/// A placeholder naming an attribute the context does not carry is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionResolver;

impl AttributeResolver for ExpressionResolver {
  #[instrument(level = "trace", skip(self, value, context))]
  fn resolve(
    &self,
    name: &str,
    value: &str,
    context: &InvocationContext,
  ) -> Result<String, ResolverError> {
    let mut missing: Option<String> = None;
    let resolved = PLACEHOLDER.replace_all(value, |caps: &Captures<'_>| {
      let attribute = &caps[1];
      match context.get(attribute) {
        Some(v) => v.to_string(),
        None => {
          missing.get_or_insert_with(|| attribute.to_string());
          String::new()
        }
      }
    });
    match missing {
      Some(attribute) => Err(ResolverError::new(
        name,
        format!("unknown attribute '{attribute}'"),
      )),
      None => Ok(resolved.into_owned()),
    }
  }
}
