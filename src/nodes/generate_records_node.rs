//! Node wrapper around [GenerationController]: one run per trigger item.

use crate::controller::GenerationController;
use crate::node::{InputStreams, Node, NodeExecutionError, OutputStreams, PortItem, port_stream};
use crate::types::{InvocationContext, Relationship};
use async_trait::async_trait;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

/// Port carrying fatal run errors as `String`.
pub const ERROR_PORT: &str = "error";

/// Extracts the invocation context from a trigger item. Items of any other type
/// trigger a run with an empty context.
pub(crate) fn trigger_context(item: PortItem) -> InvocationContext {
  match item.downcast::<InvocationContext>() {
    Ok(ctx) => (*ctx).clone(),
    Err(_) => InvocationContext::default(),
  }
}

/// Runs the prepared stage once per item on `in`; records go to `success` /
/// `failed`, fatal errors to `error`.
pub struct GenerateRecordsNode {
  /// Node display name.
  name: String,
  /// Prepared stage shared with the background task.
  controller: Arc<GenerationController>,
  /// Input port names (`in`).
  input_ports: Vec<String>,
  /// Output port names (`success`, `failed`, `error`).
  output_ports: Vec<String>,
}

impl GenerateRecordsNode {
  pub fn new(name: impl Into<String>, controller: GenerationController) -> Self {
    Self {
      name: name.into(),
      controller: Arc::new(controller),
      input_ports: vec!["in".to_string()],
      output_ports: vec![
        Relationship::Success.name().to_string(),
        Relationship::Failed.name().to_string(),
        ERROR_PORT.to_string(),
      ],
    }
  }
}

#[async_trait]
impl Node for GenerateRecordsNode {
  fn name(&self) -> &str {
    &self.name
  }

  fn set_name(&mut self, name: &str) {
    self.name = name.to_string();
  }

  fn input_port_names(&self) -> &[String] {
    &self.input_ports
  }

  fn output_port_names(&self) -> &[String] {
    &self.output_ports
  }

  fn has_input_port(&self, name: &str) -> bool {
    name == "in"
  }

  fn has_output_port(&self, name: &str) -> bool {
    Relationship::from_name(name).is_some() || name == ERROR_PORT
  }

  fn execute(
    &self,
    mut inputs: InputStreams,
  ) -> Pin<
    Box<dyn std::future::Future<Output = Result<OutputStreams, NodeExecutionError>> + Send + '_>,
  > {
    let name = self.name.clone();
    let controller = Arc::clone(&self.controller);
    Box::pin(async move {
      tracing::trace!(node = %name, "GenerateRecordsNode executing");
      let mut in_stream = inputs.remove("in").ok_or("Missing 'in' input")?;
      let (success_tx, success_rx) = tokio::sync::mpsc::channel(16);
      let (failed_tx, failed_rx) = tokio::sync::mpsc::channel(16);
      let (err_tx, err_rx) = tokio::sync::mpsc::channel(16);

      tokio::spawn(async move {
        use futures::StreamExt;
        while let Some(item) = in_stream.next().await {
          let context = trigger_context(item);
          let routed = match controller.run(&context) {
            Ok(routed) => routed,
            Err(e) => {
              tracing::error!(node = %name, error = %e, "generation failed");
              let _ = err_tx.send(Arc::new(e.to_string()) as PortItem).await;
              continue;
            }
          };
          for record in routed.success {
            let _ = success_tx.send(Arc::new(record) as PortItem).await;
          }
          for record in routed.failed {
            let _ = failed_tx.send(Arc::new(record) as PortItem).await;
          }
        }
      });

      let mut outputs = HashMap::new();
      outputs.insert(Relationship::Success.name().to_string(), port_stream(success_rx));
      outputs.insert(Relationship::Failed.name().to_string(), port_stream(failed_rx));
      outputs.insert(ERROR_PORT.to_string(), port_stream(err_rx));
      Ok(outputs)
    })
  }
}
