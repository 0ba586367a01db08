//! Stream nodes for the record generation stage.

mod generate_records_node;
#[cfg(test)]
mod generate_records_node_test;
mod trigger_source_node;

pub use generate_records_node::{ERROR_PORT, GenerateRecordsNode};
pub use trigger_source_node::TriggerSourceNode;
