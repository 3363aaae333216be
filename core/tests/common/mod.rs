// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper.

use storefront_core::{CoreError, Flow, Handler, Shared};
use tracing::Level;

#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub message: String,
  pub stages_run: Vec<String>,
  pub halt_at: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct OtherContext {
  pub visited: bool,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  // CoreError is not PartialEq; keep its Debug form for assertions.
  #[error("Core error: {0}")]
  Core(String),

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<CoreError> for TestError {
  fn from(err: CoreError) -> Self {
    TestError::Core(format!("{:?}", err))
  }
}

/// Bumps the counter, appends `message` and halts when `halt_at` names this stage.
pub fn create_simple_handler(stage: &'static str, message: &'static str) -> Handler<TestContext, TestError> {
  Box::new(move |ctx: Shared<TestContext>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.counter += 1;
      guard.message.push_str(message);
      guard.stages_run.push(stage.to_string());
      tracing::debug!(target: "test_handlers", stage, counter = guard.counter, "executed");
      if guard.halt_at.as_deref() == Some(stage) {
        return Ok(Flow::Halt);
      }
      Ok(Flow::Continue)
    })
  })
}

pub fn create_failing_handler(stage: &'static str, error_message: &'static str) -> Handler<TestContext, TestError> {
  Box::new(move |ctx: Shared<TestContext>| {
    Box::pin(async move {
      ctx.write().stages_run.push(stage.to_string());
      tracing::warn!(target: "test_handlers", stage, "failing with: '{}'", error_message);
      Err(TestError::Handler(error_message.to_string()))
    })
  })
}

use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
