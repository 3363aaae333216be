// storefront_core/src/registry.rs

//! `Registry<E>`, a type-keyed collection of workflows.
//!
//! Each workflow is stored under the type of the context it runs on, so
//! callers dispatch by handing over a `Shared<T>` and never name the
//! workflow itself.

use crate::error::CoreError;
use crate::flow::{Outcome, Shared};
use crate::workflow::Workflow;

use async_trait::async_trait;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{event, instrument, Level};

#[async_trait]
trait ErasedWorkflow<AppErr>: Send + Sync
where
  AppErr: std::error::Error + Send + Sync + 'static,
{
  /// `shared` is a boxed `Shared<T>` for the workflow's own `T`.
  async fn run_erased(&self, shared: Box<dyn Any + Send>) -> Result<Outcome, AppErr>;
}

struct TypedWorkflow<T, E, AppErr>
where
  T: Send + Sync + 'static,
  E: std::error::Error + From<CoreError> + Send + Sync + 'static,
{
  workflow: Workflow<T, E>,
  _app_err: PhantomData<fn() -> AppErr>,
}

#[async_trait]
impl<T, E, AppErr> ErasedWorkflow<AppErr> for TypedWorkflow<T, E, AppErr>
where
  T: Send + Sync + 'static,
  E: std::error::Error + From<CoreError> + Send + Sync + 'static,
  AppErr: std::error::Error + From<E> + From<CoreError> + Send + Sync + 'static,
{
  async fn run_erased(&self, shared: Box<dyn Any + Send>) -> Result<Outcome, AppErr> {
    let shared = match shared.downcast::<Shared<T>>() {
      Ok(shared) => *shared,
      Err(_) => {
        let expected_type = std::any::type_name::<Shared<T>>().to_string();
        event!(Level::ERROR, %expected_type, "Context type mismatch in registry dispatch.");
        return Err(AppErr::from(CoreError::TypeMismatch { expected_type }));
      }
    };
    self.workflow.run(shared).await.map_err(AppErr::from)
  }
}

/// Workflows keyed by context type. `AppErr` is what [`Registry::run`] returns.
pub struct Registry<AppErr = CoreError>
where
  AppErr: std::error::Error + From<CoreError> + Send + Sync + 'static,
{
  workflows: RwLock<HashMap<TypeId, Arc<dyn ErasedWorkflow<AppErr>>>>,
}

impl<AppErr> Default for Registry<AppErr>
where
  AppErr: std::error::Error + From<CoreError> + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<AppErr> Registry<AppErr>
where
  AppErr: std::error::Error + From<CoreError> + Send + Sync + 'static,
{
  pub fn new() -> Self {
    Self {
      workflows: RwLock::new(HashMap::new()),
    }
  }

  /// Registers `workflow` for context type `T`, replacing any earlier one.
  pub fn register<T, E>(&self, workflow: Workflow<T, E>)
  where
    T: Send + Sync + 'static,
    E: std::error::Error + From<CoreError> + Send + Sync + 'static,
    AppErr: From<E>,
  {
    let context_type = std::any::type_name::<T>();
    let entry: Arc<dyn ErasedWorkflow<AppErr>> = Arc::new(TypedWorkflow::<T, E, AppErr> {
      workflow,
      _app_err: PhantomData,
    });
    if self.workflows.write().insert(TypeId::of::<T>(), entry).is_some() {
      event!(Level::WARN, %context_type, "Workflow replaced an earlier registration.");
    } else {
      event!(Level::DEBUG, %context_type, "Workflow registered.");
    }
  }

  pub fn is_registered<T: 'static>(&self) -> bool {
    self.workflows.read().contains_key(&TypeId::of::<T>())
  }

  pub fn len(&self) -> usize {
    self.workflows.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.workflows.read().is_empty()
  }

  /// Runs the workflow registered for `T` against `shared`.
  #[instrument(name = "Registry::run", skip_all, fields(context_type = %std::any::type_name::<T>()))]
  pub async fn run<T>(&self, shared: Shared<T>) -> Result<Outcome, AppErr>
  where
    T: Send + Sync + 'static,
  {
    let workflow = self.workflows.read().get(&TypeId::of::<T>()).cloned();
    let workflow = workflow.ok_or_else(|| {
      let context_type = std::any::type_name::<T>();
      event!(Level::ERROR, %context_type, "No workflow registered.");
      AppErr::from(CoreError::Configuration {
        scope: "Registry::run".to_string(),
        message: format!("No workflow registered for context type {}", context_type),
      })
    })?;
    workflow.run_erased(Box::new(shared)).await
  }
}
