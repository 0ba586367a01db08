//! # streamweave-generate-records
//!
//! A pipeline stage that turns a JSON array of flat objects into records.
//!
//! Each array element becomes one record routed to `success`, carrying the
//! element's fields merged over the stage's static (dynamic-property)
//! attributes. When the configured JSON is not a non-empty array of flat
//! objects, a single record with only the static attributes goes to `failed`.
//!
//! ## Architecture
//!
//! - [decoder]: markets JSON → attribute maps (all-or-nothing).
//! - [collector]: dynamic properties → static attributes (best effort).
//! - [factory]: attribute map → [OutputRecord] with a fresh identity.
//! - [controller]: `prepare(config)` / `run(context)` for one invocation.
//! - [nodes]: stream node wrapping the controller, plus a tick trigger.

pub mod collector;
pub mod config;
pub mod config_io;
#[cfg(test)]
mod config_io_test;
pub mod controller;
pub mod decoder;
pub mod error;
pub mod factory;
#[cfg(test)]
mod factory_test;
pub mod node;
pub mod nodes;
pub mod resolver;
pub mod runner;
pub mod types;

pub use config::{DynamicProperty, MARKETS_JSON, StageConfig};
pub use controller::{GenerateRecordsStage, GenerationController, merge_attributes};
pub use decoder::decode_json_array;
pub use error::{ConfigError, DecodeError, GenerateError, ResolverError};
pub use factory::{RecordFactory, UuidRecordFactory};
pub use nodes::{GenerateRecordsNode, TriggerSourceNode};
pub use resolver::{AttributeResolver, ExpressionResolver, LiteralResolver};
pub use runner::{RoutedStreams, run_generate_node, run_scheduled_tick};
pub use types::{
  AttributeMap, GenerationOutcome, GenerationState, InvocationContext, OutputRecord, RecordId,
  Relationship, RoutedRecords,
};
