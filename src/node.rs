//! Stream node contract shared by every stage node in this crate.
//!
//! A node owns named input and output ports. Items travel between ports as
//! `Arc<dyn Any + Send + Sync>` and are downcast by the receiving node.

use async_trait::async_trait;
use std::any::Any;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

/// One item flowing through a port.
pub type PortItem = Arc<dyn Any + Send + Sync>;

/// Stream of items attached to one port.
pub type PortStream = Pin<Box<dyn futures::Stream<Item = PortItem> + Send>>;

/// Input streams keyed by input port name.
pub type InputStreams = HashMap<String, PortStream>;

/// Output streams keyed by output port name.
pub type OutputStreams = HashMap<String, PortStream>;

/// Error returned when a node cannot start executing (e.g. a required port is missing).
pub type NodeExecutionError = Box<dyn std::error::Error + Send + Sync>;

/// A unit of work in a stream graph.
#[async_trait]
pub trait Node: Send + Sync {
  fn name(&self) -> &str;

  fn set_name(&mut self, name: &str);

  fn input_port_names(&self) -> &[String];

  fn output_port_names(&self) -> &[String];

  fn has_input_port(&self, name: &str) -> bool;

  fn has_output_port(&self, name: &str) -> bool;

  /// Wires the input streams and returns the output streams. Items are produced
  /// by a background task, so the returned streams end when the inputs end.
  fn execute(
    &self,
    inputs: InputStreams,
  ) -> Pin<
    Box<dyn std::future::Future<Output = Result<OutputStreams, NodeExecutionError>> + Send + '_>,
  >;
}

/// Wraps the receiving half of a channel as a boxed port stream.
pub(crate) fn port_stream(rx: tokio::sync::mpsc::Receiver<PortItem>) -> PortStream {
  Box::pin(tokio_stream::wrappers::ReceiverStream::new(rx))
}
