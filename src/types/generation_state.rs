//! Lifecycle of one generation run and how it ended.

use std::fmt;

use super::Relationship;

/// `Start -> Decoded -> {EmittingSuccess | EmittingFailure} -> Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
  Start,
  Decoded,
  EmittingSuccess,
  EmittingFailure,
  Done,
}

impl GenerationState {
  /// Next state on the unbranched edges. `Decoded` only leaves through [Self::route].
  pub fn next(self) -> Self {
    match self {
      GenerationState::Start => GenerationState::Decoded,
      GenerationState::Decoded => GenerationState::Decoded,
      GenerationState::EmittingSuccess | GenerationState::EmittingFailure | GenerationState::Done => {
        GenerationState::Done
      }
    }
  }

  /// Branch out of `Decoded`. Any other state is returned unchanged.
  pub fn route(self, has_markets: bool) -> Self {
    match self {
      GenerationState::Decoded if has_markets => GenerationState::EmittingSuccess,
      GenerationState::Decoded => GenerationState::EmittingFailure,
      other => other,
    }
  }

  pub fn is_terminal(self) -> bool {
    self == GenerationState::Done
  }
}

impl fmt::Display for GenerationState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GenerationState::Start => write!(f, "start"),
      GenerationState::Decoded => write!(f, "decoded"),
      GenerationState::EmittingSuccess => write!(f, "emitting_success"),
      GenerationState::EmittingFailure => write!(f, "emitting_failure"),
      GenerationState::Done => write!(f, "done"),
    }
  }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
  /// `count` records were routed to success.
  Generated { count: usize },
  /// The markets array was valid but empty.
  Empty,
  /// The markets JSON could not be decoded.
  DecodeFailed { reason: String },
}

impl GenerationOutcome {
  /// Relationship the run's records were routed to.
  pub fn relationship(&self) -> Relationship {
    match self {
      GenerationOutcome::Generated { .. } => Relationship::Success,
      GenerationOutcome::Empty | GenerationOutcome::DecodeFailed { .. } => Relationship::Failed,
    }
  }

  /// Number of records routed to success (0 on the failure path).
  pub fn success_count(&self) -> usize {
    match self {
      GenerationOutcome::Generated { count } => *count,
      _ => 0,
    }
  }
}
