//! Emits a single trigger (an [InvocationContext]) then completes. Stands in for
//! one scheduling tick.

use crate::node::{InputStreams, Node, NodeExecutionError, OutputStreams, PortItem, port_stream};
use crate::types::InvocationContext;
use async_trait::async_trait;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Emits one InvocationContext then completes.
pub struct TriggerSourceNode {
  name: String,
  context: InvocationContext,
}

impl TriggerSourceNode {
  pub fn new(name: impl Into<String>) -> Self {
    Self::with_context(name, InvocationContext::default())
  }

  pub fn with_context(name: impl Into<String>, context: InvocationContext) -> Self {
    Self {
      name: name.into(),
      context,
    }
  }
}

#[async_trait]
impl Node for TriggerSourceNode {
  fn name(&self) -> &str { &self.name }
  fn set_name(&mut self, name: &str) { self.name = name.to_string(); }
  fn input_port_names(&self) -> &[String] { &[] }
  fn output_port_names(&self) -> &[String] {
    static P: std::sync::OnceLock<Vec<String>> = std::sync::OnceLock::new();
    P.get_or_init(|| vec!["out".to_string()])
  }
  fn has_input_port(&self, _: &str) -> bool { false }
  fn has_output_port(&self, name: &str) -> bool { name == "out" }

  fn execute(
    &self,
    _inputs: InputStreams,
  ) -> Pin<Box<dyn std::future::Future<Output = Result<OutputStreams, NodeExecutionError>> + Send + '_>> {
    let context = self.context.clone();
    Box::pin(async move {
      let (tx, rx) = mpsc::channel(1);
      let _ = tx.send(Arc::new(context) as PortItem).await;
      drop(tx);
      let mut outputs = HashMap::new();
      outputs.insert("out".to_string(), port_stream(rx));
      Ok(outputs)
    })
  }
}
