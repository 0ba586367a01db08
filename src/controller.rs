//! Runs one invocation of the stage: resolve, decode, merge, create and route.

use std::sync::Arc;

use tracing::{error, info, instrument, trace};

use crate::collector::collect_static_attributes;
use crate::config::{MARKETS_JSON, StageConfig};
use crate::decoder::decode_json_array;
use crate::error::{ConfigError, GenerateError};
use crate::factory::{RecordFactory, UuidRecordFactory};
use crate::resolver::{AttributeResolver, LiteralResolver};
use crate::types::{
  AttributeMap, GenerationOutcome, GenerationState, InvocationContext, Relationship,
  RoutedRecords,
};

/// Merges one decoded element over the static attributes. Element keys win.
pub fn merge_attributes(static_attributes: &AttributeMap, element: AttributeMap) -> AttributeMap {
  let mut merged = static_attributes.clone();
  merged.extend(element);
  merged
}

/// Builds prepared controllers. Defaults to [LiteralResolver] and [UuidRecordFactory].
#[derive(Clone)]
pub struct GenerateRecordsStage {
  resolver: Arc<dyn AttributeResolver>,
  factory: Arc<dyn RecordFactory>,
}

impl Default for GenerateRecordsStage {
  fn default() -> Self {
    Self::new()
  }
}

impl GenerateRecordsStage {
  pub fn new() -> Self {
    Self {
      resolver: Arc::new(LiteralResolver),
      factory: Arc::new(UuidRecordFactory),
    }
  }

  pub fn with_resolver(mut self, resolver: impl AttributeResolver + 'static) -> Self {
    self.resolver = Arc::new(resolver);
    self
  }

  pub fn with_record_factory(mut self, factory: impl RecordFactory + 'static) -> Self {
    self.factory = Arc::new(factory);
    self
  }

  /// Validates `config` once per scheduling activation.
  #[instrument(level = "trace", skip(self, config))]
  pub fn prepare(&self, config: StageConfig) -> Result<GenerationController, ConfigError> {
    config.validate()?;
    Ok(GenerationController {
      config,
      resolver: Arc::clone(&self.resolver),
      factory: Arc::clone(&self.factory),
    })
  }
}

/// A prepared stage. Each [GenerationController::run] is an independent invocation.
#[derive(Clone)]
pub struct GenerationController {
  config: StageConfig,
  resolver: Arc<dyn AttributeResolver>,
  factory: Arc<dyn RecordFactory>,
}

impl GenerationController {
  pub fn config(&self) -> &StageConfig {
    &self.config
  }

  /// Runs one invocation.
  ///
  /// Decoded elements go to [Relationship::Success], one record each. A decode
  /// failure or an empty array sends a single record carrying only the static
  /// attributes to [Relationship::Failed]. Only a failure to resolve
  /// [MARKETS_JSON] is an error; nothing is emitted then.
  #[instrument(level = "trace", skip(self, context))]
  pub fn run(&self, context: &InvocationContext) -> Result<RoutedRecords, GenerateError> {
    let mut state = GenerationState::Start;
    let raw = self
      .resolver
      .resolve(MARKETS_JSON, &self.config.markets_json, context)?;
    let static_attributes =
      collect_static_attributes(&self.config.dynamic_properties, self.resolver.as_ref(), context);

    let decoded = decode_json_array(&raw);
    state = state.next();
    trace!(%state, "markets json decoded");

    let markets = match decoded {
      Ok(markets) => markets,
      Err(e) => {
        error!(error = %e, "Failed to parse markets json");
        return Ok(self.emit_failure(
          state,
          static_attributes,
          GenerationOutcome::DecodeFailed {
            reason: e.to_string(),
          },
        ));
      }
    };
    if markets.is_empty() {
      return Ok(self.emit_failure(state, static_attributes, GenerationOutcome::Empty));
    }

    state = state.route(true);
    trace!(%state, count = markets.len(), "emitting records");
    let mut routed = RoutedRecords::new(GenerationOutcome::Generated {
      count: markets.len(),
    });
    for market in markets {
      let record = self
        .factory
        .create(merge_attributes(&static_attributes, market));
      routed.transfer(record, Relationship::Success);
    }
    state = state.next();
    trace!(%state, "generation done");
    info!(success_count = routed.success_count(), "Generated {} records", routed.success_count());
    Ok(routed)
  }

  fn emit_failure(
    &self,
    state: GenerationState,
    static_attributes: AttributeMap,
    outcome: GenerationOutcome,
  ) -> RoutedRecords {
    let state = state.route(false);
    trace!(%state, "emitting failure record");
    let mut routed = RoutedRecords::new(outcome);
    routed.transfer(self.factory.create(static_attributes), Relationship::Failed);
    let state = state.next();
    trace!(%state, "generation done");
    info!(success_count = 0, "Generated {} records", 0);
    routed
  }
}
