// storefront_core/src/workflow/hooks.rs

//! Registration of `before`, `on` and `after` handlers.

use crate::error::CoreError;
use crate::flow::{Flow, Handler, Phase, Shared};
use crate::workflow::definition::Workflow;
use std::future::Future;
use tracing::{event, Level};

impl<T, E> Workflow<T, E>
where
  T: Send + Sync + 'static,
  E: std::error::Error + From<CoreError> + Send + Sync + 'static,
{
  /// Registers a handler that runs before the stage's `on` handlers.
  ///
  /// The handler may fail with any error convertible into the workflow's `E`.
  pub fn before<F, UE>(&mut self, stage: &str, handler_fn: impl Fn(Shared<T>) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<Flow, UE>> + Send + 'static,
    UE: Into<E> + Send + Sync + 'static,
  {
    self.register(Phase::Before, stage, handler_fn);
  }

  /// Registers the main handler of a stage.
  pub fn on<F, UE>(&mut self, stage: &str, handler_fn: impl Fn(Shared<T>) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<Flow, UE>> + Send + 'static,
    UE: Into<E> + Send + Sync + 'static,
  {
    self.register(Phase::On, stage, handler_fn);
  }

  pub fn after<F, UE>(&mut self, stage: &str, handler_fn: impl Fn(Shared<T>) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<Flow, UE>> + Send + 'static,
    UE: Into<E> + Send + Sync + 'static,
  {
    self.register(Phase::After, stage, handler_fn);
  }

  /// Registers an already boxed [`Handler`], e.g. one shared between workflows.
  pub fn on_boxed(&mut self, stage: &str, handler: Handler<T, E>) {
    self.ensure_stage_exists(stage);
    self.handlers.entry(stage.to_string()).or_default().on.push(handler);
  }

  fn register<F, UE>(&mut self, phase: Phase, stage: &str, handler_fn: impl Fn(Shared<T>) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<Flow, UE>> + Send + 'static,
    UE: Into<E> + Send + Sync + 'static,
  {
    self.ensure_stage_exists(stage);
    let handler: Handler<T, E> = Box::new(move |shared| {
      let fut = handler_fn(shared);
      Box::pin(async move { fut.await.map_err(Into::into) })
    });
    self
      .handlers
      .entry(stage.to_string())
      .or_default()
      .phase_mut(phase)
      .push(handler);
    event!(Level::TRACE, %stage, phase = phase.as_str(), "Handler registered.");
  }
}
