// storefront_core/src/workflow/definition.rs

//! The `Workflow<T, E>` struct and its structural editing methods.

use crate::error::CoreError;
use crate::flow::{Handler, Phase, SkipCondition, StageDef};
use std::collections::HashMap;

/// Handlers registered for one stage, grouped by phase.
pub(crate) struct StageHandlers<T: Send + Sync + 'static, E> {
  pub(crate) before: Vec<Handler<T, E>>,
  pub(crate) on: Vec<Handler<T, E>>,
  pub(crate) after: Vec<Handler<T, E>>,
}

impl<T: Send + Sync + 'static, E> Default for StageHandlers<T, E> {
  fn default() -> Self {
    Self {
      before: Vec::new(),
      on: Vec::new(),
      after: Vec::new(),
    }
  }
}

impl<T: Send + Sync + 'static, E> StageHandlers<T, E> {
  pub(crate) fn phase(&self, phase: Phase) -> &[Handler<T, E>] {
    match phase {
      Phase::Before => &self.before,
      Phase::On => &self.on,
      Phase::After => &self.after,
    }
  }

  pub(crate) fn phase_mut(&mut self, phase: Phase) -> &mut Vec<Handler<T, E>> {
    match phase {
      Phase::Before => &mut self.before,
      Phase::On => &mut self.on,
      Phase::After => &mut self.after,
    }
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.before.is_empty() && self.on.is_empty() && self.after.is_empty()
  }
}

/// An ordered list of named stages run against a shared context `T`.
///
/// Handlers return `Result<Flow, E>`; `E` must absorb [`CoreError`] so the
/// engine can report its own failures (e.g. a required stage with no handler)
/// through the same error type.
pub struct Workflow<T, E>
where
  T: Send + Sync + 'static,
  E: std::error::Error + From<CoreError> + Send + Sync + 'static,
{
  pub(crate) stages: Vec<StageDef<T>>,
  pub(crate) handlers: HashMap<String, StageHandlers<T, E>>,
}

impl<T, E> Workflow<T, E>
where
  T: Send + Sync + 'static,
  E: std::error::Error + From<CoreError> + Send + Sync + 'static,
{
  /// Creates a workflow from `(name, optional, skip_if)` triples, in run order.
  pub fn new(stage_defs: &[(&str, bool, Option<SkipCondition<T>>)]) -> Self {
    let mut workflow = Self {
      stages: Vec::with_capacity(stage_defs.len()),
      handlers: HashMap::new(),
    };
    for (name, optional, skip_if) in stage_defs {
      workflow.ensure_stage_absent(name);
      workflow.stages.push(StageDef {
        name: (*name).to_string(),
        optional: *optional,
        skip_if: skip_if.clone(),
      });
    }
    workflow
  }

  pub fn stage_names(&self) -> Vec<&str> {
    self.stages.iter().map(|s| s.name.as_str()).collect()
  }

  pub fn len(&self) -> usize {
    self.stages.len()
  }

  pub fn is_empty(&self) -> bool {
    self.stages.is_empty()
  }

  fn position(&self, stage: &str) -> Option<usize> {
    self.stages.iter().position(|s| s.name == stage)
  }

  /// Index of `stage`. Panics on unknown names: a typo in a stage name is a
  /// setup bug, not a runtime condition.
  pub(crate) fn ensure_stage_exists(&self, stage: &str) -> usize {
    match self.position(stage) {
      Some(idx) => idx,
      None => panic!(
        "workflow setup error: {}",
        CoreError::StageNotFound {
          stage: stage.to_string()
        }
      ),
    }
  }

  fn ensure_stage_absent(&self, stage: &str) {
    if self.position(stage).is_some() {
      panic!("workflow setup error: stage '{}' is defined twice", stage);
    }
  }

  pub fn insert_before_stage<S: Into<String>>(
    &mut self,
    existing: &str,
    new_stage: S,
    optional: bool,
    skip_if: Option<SkipCondition<T>>,
  ) {
    let idx = self.ensure_stage_exists(existing);
    self.insert_at(idx, new_stage.into(), optional, skip_if);
  }

  pub fn insert_after_stage<S: Into<String>>(
    &mut self,
    existing: &str,
    new_stage: S,
    optional: bool,
    skip_if: Option<SkipCondition<T>>,
  ) {
    let idx = self.ensure_stage_exists(existing);
    self.insert_at(idx + 1, new_stage.into(), optional, skip_if);
  }

  fn insert_at(&mut self, idx: usize, name: String, optional: bool, skip_if: Option<SkipCondition<T>>) {
    self.ensure_stage_absent(&name);
    self.stages.insert(idx, StageDef { name, optional, skip_if });
  }

  /// Removes a stage and its handlers. Unknown names are ignored.
  pub fn remove_stage(&mut self, stage: &str) {
    if let Some(idx) = self.position(stage) {
      self.stages.remove(idx);
      self.handlers.remove(stage);
    }
  }

  pub fn set_optional(&mut self, stage: &str, optional: bool) {
    let idx = self.ensure_stage_exists(stage);
    self.stages[idx].optional = optional;
  }

  pub fn set_skip_condition(&mut self, stage: &str, skip_if: Option<SkipCondition<T>>) {
    let idx = self.ensure_stage_exists(stage);
    self.stages[idx].skip_if = skip_if;
  }
}
