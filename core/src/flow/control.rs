// storefront_core/src/flow/control.rs

//! Signals for controlling workflow flow and the outcome of a workflow run.

/// Returned by a handler to continue with the workflow or halt it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  /// Halt the workflow. Remaining handlers of this stage and all later
  /// stages are not executed. Used for expected stops such as failed
  /// form validation.
  Halt,
}

/// Outcome of a full workflow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Completed,
  Halted,
}

impl Outcome {
  pub fn is_completed(self) -> bool {
    matches!(self, Outcome::Completed)
  }
}
