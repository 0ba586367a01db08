//! Data types for the record generation stage.
//!
//! Records and invocation contexts flow through the node graph as `Arc<dyn Any>`.

use std::collections::HashMap;

mod generation_state;
mod invocation_context;
#[cfg(test)]
mod invocation_context_test;
mod output_record;
#[cfg(test)]
mod output_record_test;
mod relationship;
mod routed_records;

pub use generation_state::{GenerationOutcome, GenerationState};
pub use invocation_context::InvocationContext;
pub use output_record::{OutputRecord, RecordId};
pub use relationship::Relationship;
pub use routed_records::RoutedRecords;

/// Attribute name to attribute value. All values are strings.
pub type AttributeMap = HashMap<String, String>;
