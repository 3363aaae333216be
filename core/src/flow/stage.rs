// storefront_core/src/flow/stage.rs

//! Stage definitions and the handler type stages run.

use super::{Flow, Shared};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Predicate evaluated before a stage runs. `true` skips the stage.
pub type SkipCondition<T> = Arc<dyn Fn(Shared<T>) -> bool + Send + Sync + 'static>;

/// A boxed async stage handler.
///
/// Handlers receive a clone of the workflow's [`Shared`] state. Lock guards
/// taken inside a handler must be released before the handler awaits.
pub type Handler<T, E> =
  Box<dyn Fn(Shared<T>) -> Pin<Box<dyn Future<Output = Result<Flow, E>> + Send>> + Send + Sync>;

/// The phase a handler is registered for within its stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
  Before,
  On,
  After,
}

impl Phase {
  pub const ALL: [Phase; 3] = [Phase::Before, Phase::On, Phase::After];

  pub fn as_str(self) -> &'static str {
    match self {
      Phase::Before => "before",
      Phase::On => "on",
      Phase::After => "after",
    }
  }
}

#[derive(Clone)]
pub struct StageDef<T: Send + Sync + 'static> {
  pub name: String,
  /// Optional stages are skipped when they have no handlers, and their
  /// handler failures are logged instead of failing the workflow.
  pub optional: bool,
  pub skip_if: Option<SkipCondition<T>>,
}

impl<T: Send + Sync + 'static> fmt::Debug for StageDef<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StageDef")
      .field("name", &self.name)
      .field("optional", &self.optional)
      .field("skip_if_present", &self.skip_if.is_some())
      .finish()
  }
}
