// storefront_core/src/workflow/execution.rs

//! `Workflow::run`, which executes the stages against a shared context.

use crate::error::CoreError;
use crate::flow::{Flow, Outcome, Phase, Shared, StageDef};
use crate::workflow::definition::{StageHandlers, Workflow};
use tracing::{event, instrument, span, Instrument, Level};

/// What happened to a single stage.
enum StageResult<E> {
  Done,
  Halted,
  Failed(E),
}

impl<T, E> Workflow<T, E>
where
  T: Send + Sync + 'static,
  E: std::error::Error + From<CoreError> + Send + Sync + 'static,
{
  /// Runs every stage in order against `shared`.
  ///
  /// A stage is skipped when its `skip_if` holds, or when it is optional and
  /// has no handlers. A required stage without handlers fails with
  /// [`CoreError::HandlerMissing`]. A handler returning [`Flow::Halt`] ends the
  /// run with [`Outcome::Halted`]. A failing handler ends the run with its
  /// error, unless the stage is optional, in which case the failure is logged
  /// and the run moves on to the next stage.
  #[instrument(
    name = "Workflow::run",
    skip_all,
    fields(context_type = %std::any::type_name::<T>(), num_stages = self.stages.len()),
    err(Display)
  )]
  pub async fn run(&self, shared: Shared<T>) -> Result<Outcome, E> {
    event!(Level::DEBUG, "Workflow starting.");

    for (index, stage) in self.stages.iter().enumerate() {
      let stage_span = span!(
        Level::INFO,
        "workflow_stage",
        stage = stage.name.as_str(),
        index,
        optional = stage.optional
      );

      if let Some(skip_if) = &stage.skip_if {
        if skip_if(shared.clone()) {
          event!(parent: &stage_span, Level::INFO, "Stage skipped by its skip condition.");
          continue;
        }
      }

      let handlers = match self.handlers.get(&stage.name).filter(|h| !h.is_empty()) {
        Some(handlers) => handlers,
        None if stage.optional => {
          event!(parent: &stage_span, Level::DEBUG, "Optional stage has no handlers, skipping.");
          continue;
        }
        None => {
          event!(parent: &stage_span, Level::ERROR, "Required stage has no handlers.");
          return Err(E::from(CoreError::HandlerMissing {
            stage: stage.name.clone(),
          }));
        }
      };

      match run_stage(stage, handlers, &shared).instrument(stage_span.clone()).await {
        StageResult::Done => {}
        StageResult::Halted => {
          event!(parent: &stage_span, Level::INFO, "Workflow halted.");
          return Ok(Outcome::Halted);
        }
        StageResult::Failed(err) if stage.optional => {
          event!(parent: &stage_span, Level::WARN, error = %err, "Optional stage failed, continuing.");
        }
        StageResult::Failed(err) => return Err(err),
      }
    }

    event!(Level::DEBUG, "Workflow completed.");
    Ok(Outcome::Completed)
  }
}

async fn run_stage<T, E>(stage: &StageDef<T>, handlers: &StageHandlers<T, E>, shared: &Shared<T>) -> StageResult<E>
where
  T: Send + Sync + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  for phase in Phase::ALL {
    for (handler_index, handler) in handlers.phase(phase).iter().enumerate() {
      match handler(shared.clone()).await {
        Ok(Flow::Continue) => {}
        Ok(Flow::Halt) => {
          event!(Level::INFO, phase = phase.as_str(), handler_index, "Handler halted the workflow.");
          return StageResult::Halted;
        }
        Err(err) => {
          event!(
            Level::ERROR,
            stage = stage.name.as_str(),
            phase = phase.as_str(),
            handler_index,
            error = %err,
            "Handler failed."
          );
          return StageResult::Failed(err);
        }
      }
    }
  }
  StageResult::Done
}
