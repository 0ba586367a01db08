//! Tests for `GenerateRecordsNode`.

use std::collections::HashMap;
use std::sync::Arc;

use futures::StreamExt;
use tokio_stream::wrappers::ReceiverStream;

use super::GenerateRecordsNode;
use super::generate_records_node::trigger_context;
use crate::config::StageConfig;
use crate::controller::GenerateRecordsStage;
use crate::node::{InputStreams, Node, PortItem};
use crate::resolver::ExpressionResolver;
use crate::types::{InvocationContext, OutputRecord};

fn node_for(config: StageConfig) -> GenerateRecordsNode {
  let controller = GenerateRecordsStage::new()
    .with_resolver(ExpressionResolver)
    .prepare(config)
    .unwrap();
  GenerateRecordsNode::new("generate", controller)
}

async fn inputs_with(items: Vec<PortItem>) -> InputStreams {
  let (tx, rx) = tokio::sync::mpsc::channel(items.len().max(1));
  for item in items {
    tx.send(item).await.unwrap();
  }
  drop(tx);
  let mut inputs: InputStreams = HashMap::new();
  inputs.insert(
    "in".to_string(),
    Box::pin(ReceiverStream::new(rx))
      as std::pin::Pin<Box<dyn futures::Stream<Item = PortItem> + Send>>,
  );
  inputs
}

async fn drain_records(stream: crate::node::PortStream) -> Vec<OutputRecord> {
  stream
    .filter_map(|item| async move { item.downcast::<OutputRecord>().ok().map(|r| (*r).clone()) })
    .collect()
    .await
}

#[test]
fn node_trait_methods() {
  let mut node = node_for(StageConfig::new("[]"));
  assert_eq!(node.name(), "generate");
  node.set_name("gen");
  assert_eq!(node.name(), "gen");
  assert_eq!(node.input_port_names(), &["in"]);
  assert_eq!(node.output_port_names(), &["success", "failed", "error"]);
  assert!(node.has_input_port("in"));
  assert!(!node.has_input_port("out"));
  assert!(node.has_output_port("success"));
  assert!(node.has_output_port("failed"));
  assert!(node.has_output_port("error"));
  assert!(!node.has_output_port("fail"));
}

#[tokio::test]
async fn node_execute_err_missing_input() {
  let node = node_for(StageConfig::new("[]"));
  let result = node.execute(HashMap::new()).await;
  assert!(result.is_err());
}

#[tokio::test]
async fn node_execute_routes_to_success() {
  let node = node_for(StageConfig::new(r#"[{"id":"1"},{"id":"2"}]"#).with_property("env", "prod"));
  let inputs = inputs_with(vec![Arc::new(InvocationContext::default()) as PortItem]).await;
  let mut outputs = node.execute(inputs).await.unwrap();
  let success = outputs.remove("success").unwrap();
  let failed = outputs.remove("failed").unwrap();
  let errors = outputs.remove("error").unwrap();
  let (success, failed, errors) = futures::join!(
    drain_records(success),
    drain_records(failed),
    errors.collect::<Vec<_>>()
  );
  assert_eq!(success.len(), 2);
  assert_eq!(success[0].attribute("id"), Some("1"));
  assert_eq!(success[1].attribute("env"), Some("prod"));
  assert!(failed.is_empty());
  assert!(errors.is_empty());
}

#[tokio::test]
async fn node_execute_routes_empty_array_to_failed() {
  let node = node_for(StageConfig::new("[]"));
  let inputs = inputs_with(vec![Arc::new(()) as PortItem]).await;
  let mut outputs = node.execute(inputs).await.unwrap();
  let success = outputs.remove("success").unwrap();
  let failed = outputs.remove("failed").unwrap();
  let (success, failed) = futures::join!(drain_records(success), drain_records(failed));
  assert!(success.is_empty());
  assert_eq!(failed.len(), 1);
}

#[tokio::test]
async fn node_execute_reports_resolver_failure_on_error_port() {
  let node = node_for(StageConfig::new("${markets}"));
  let inputs = inputs_with(vec![Arc::new(InvocationContext::default()) as PortItem]).await;
  let mut outputs = node.execute(inputs).await.unwrap();
  let success = outputs.remove("success").unwrap();
  let errors = outputs.remove("error").unwrap();
  let (success, errors) = futures::join!(drain_records(success), errors.collect::<Vec<_>>());
  assert!(success.is_empty());
  assert_eq!(errors.len(), 1);
  let msg = errors[0].clone().downcast::<String>().unwrap();
  assert!(msg.contains("MARKETS_JSON"));
}

#[test]
fn trigger_context_uses_context_items() {
  let ctx = InvocationContext::default().with_attribute("k", "v");
  let got = trigger_context(Arc::new(ctx.clone()) as PortItem);
  assert_eq!(got, ctx);
}

#[test]
fn trigger_context_defaults_for_other_items() {
  let got = trigger_context(Arc::new(42_usize) as PortItem);
  assert_eq!(got, InvocationContext::default());
}
