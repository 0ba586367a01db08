//! Drives the generate-records node and collects what it routes.
//!
//! - [run_generate_node]: feed invocation contexts into `in`, collect every port.
//! - [run_scheduled_tick]: wire a [TriggerSourceNode] into the node for one tick.

use crate::node::{InputStreams, Node, OutputStreams, PortItem, PortStream, port_stream};
use crate::nodes::{ERROR_PORT, GenerateRecordsNode, TriggerSourceNode};
use crate::types::{InvocationContext, OutputRecord, Relationship};
use futures::StreamExt;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

/// Everything a node run produced, per output port.
#[derive(Debug, Clone, Default)]
pub struct RoutedStreams {
  /// Records from the `success` port, in emission order.
  pub success: Vec<OutputRecord>,
  /// Records from the `failed` port.
  pub failed: Vec<OutputRecord>,
  /// Fatal run errors from the `error` port.
  pub errors: Vec<String>,
}

/// Feeds `contexts` (one run each) into the node and waits until every output port ends.
#[instrument(level = "trace", skip(node, contexts), fields(runs = contexts.len()))]
pub async fn run_generate_node(
  node: &GenerateRecordsNode,
  contexts: Vec<InvocationContext>,
) -> Result<RoutedStreams, String> {
  let (tx_in, rx_in) = tokio::sync::mpsc::channel(contexts.len().max(1));
  for ctx in contexts {
    tx_in
      .send(Arc::new(ctx) as PortItem)
      .await
      .map_err(|e| e.to_string())?;
  }
  drop(tx_in);
  run_with_input(node, port_stream(rx_in)).await
}

/// Runs one scheduling tick: the trigger's `out` feeds the node's `in`.
#[instrument(level = "trace", skip(trigger, node))]
pub async fn run_scheduled_tick(
  trigger: &TriggerSourceNode,
  node: &GenerateRecordsNode,
) -> Result<RoutedStreams, String> {
  let mut trigger_out = trigger
    .execute(HashMap::new())
    .await
    .map_err(|e| e.to_string())?;
  let ticks = trigger_out
    .remove("out")
    .ok_or("trigger has no 'out' port")?;
  run_with_input(node, ticks).await
}

async fn run_with_input(
  node: &GenerateRecordsNode,
  input: PortStream,
) -> Result<RoutedStreams, String> {
  let mut inputs: InputStreams = HashMap::new();
  inputs.insert("in".to_string(), input);
  let mut outputs = node.execute(inputs).await.map_err(|e| e.to_string())?;

  let success = take_port(&mut outputs, Relationship::Success.name())?;
  let failed = take_port(&mut outputs, Relationship::Failed.name())?;
  let errors = take_port(&mut outputs, ERROR_PORT)?;

  // Drain all ports together; the node blocks once any one channel is full.
  let (success, failed, errors) = futures::join!(
    collect_records(success),
    collect_records(failed),
    errors
      .filter_map(|item| async move { item.downcast::<String>().ok().map(|s| (*s).clone()) })
      .collect::<Vec<_>>()
  );
  info!(
    node = %node.name(),
    success = success.len(),
    failed = failed.len(),
    errors = errors.len(),
    "node run complete"
  );
  Ok(RoutedStreams {
    success,
    failed,
    errors,
  })
}

fn take_port(outputs: &mut OutputStreams, port: &str) -> Result<PortStream, String> {
  outputs
    .remove(port)
    .ok_or_else(|| format!("missing '{port}' output"))
}

async fn collect_records(stream: PortStream) -> Vec<OutputRecord> {
  stream
    .filter_map(|item| async move { item.downcast::<OutputRecord>().ok().map(|r| (*r).clone()) })
    .collect()
    .await
}
