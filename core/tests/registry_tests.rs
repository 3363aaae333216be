// tests/registry_tests.rs
mod common;

use common::*;
use serial_test::serial;
use storefront_core::{CoreError, Flow, Outcome, Registry, Shared, Workflow};

fn single_stage_workflow(stage: &'static str, message: &'static str) -> Workflow<TestContext, TestError> {
  let mut wf = Workflow::<TestContext, TestError>::new(&[(stage, false, None)]);
  wf.on_boxed(stage, create_simple_handler(stage, message));
  wf
}

fn other_workflow() -> Workflow<OtherContext, CoreError> {
  let mut wf = Workflow::<OtherContext, CoreError>::new(&[("visit", false, None)]);
  wf.on("visit", |ctx: Shared<OtherContext>| async move {
    ctx.write().visited = true;
    Ok::<_, CoreError>(Flow::Continue)
  });
  wf
}

#[tokio::test]
#[serial]
async fn test_registry_dispatches_on_context_type() {
  setup_tracing();
  let registry: Registry<TestError> = Registry::new();
  registry.register(single_stage_workflow("greet", "hello"));
  registry.register(other_workflow());

  assert_eq!(registry.len(), 2);
  assert!(registry.is_registered::<TestContext>());
  assert!(registry.is_registered::<OtherContext>());

  let ctx = Shared::new(TestContext::default());
  assert_eq!(registry.run(ctx.clone()).await.unwrap(), Outcome::Completed);
  assert_eq!(ctx.read().message, "hello");

  let other = Shared::new(OtherContext::default());
  registry.run(other.clone()).await.unwrap();
  assert!(other.read().visited);
}

#[tokio::test]
#[serial]
async fn test_registry_run_without_registration_fails() {
  setup_tracing();
  let registry: Registry<TestError> = Registry::new();
  assert!(registry.is_empty());

  let result = registry.run(Shared::new(TestContext::default())).await;

  match result {
    Err(TestError::Core(message)) => {
      assert!(message.contains("Configuration"));
      assert!(message.contains("No workflow registered"));
    }
    other => panic!("Expected a configuration error, got {:?}", other),
  }
}

#[tokio::test]
#[serial]
async fn test_registering_twice_replaces_the_workflow() {
  setup_tracing();
  let registry: Registry<TestError> = Registry::new();
  registry.register(single_stage_workflow("first", "first"));
  registry.register(single_stage_workflow("second", "second"));
  assert_eq!(registry.len(), 1);

  let ctx = Shared::new(TestContext::default());
  registry.run(ctx.clone()).await.unwrap();
  assert_eq!(ctx.read().message, "second");
  assert_eq!(ctx.read().stages_run, vec!["second"]);
}

#[tokio::test]
#[serial]
async fn test_registry_propagates_workflow_errors_and_halts() {
  setup_tracing();
  let registry: Registry<TestError> = Registry::default();
  let mut wf = Workflow::<TestContext, TestError>::new(&[("check", false, None), ("fail", false, None)]);
  wf.on_boxed("check", create_simple_handler("check", "checked"));
  wf.on_boxed("fail", create_failing_handler("fail", "downstream unavailable"));
  registry.register(wf);

  let result = registry.run(Shared::new(TestContext::default())).await;
  assert_eq!(result, Err(TestError::Handler("downstream unavailable".to_string())));

  let halted = Shared::new(TestContext {
    halt_at: Some("check".to_string()),
    ..Default::default()
  });
  assert_eq!(registry.run(halted.clone()).await.unwrap(), Outcome::Halted);
  assert_eq!(halted.read().stages_run, vec!["check"]);
}

#[test]
fn test_shared_handles_point_at_the_same_data() {
  let shared = Shared::new(TestContext::default());
  let handle = shared.clone();
  handle.write().counter = 7;
  assert_eq!(shared.read().counter, 7);

  let message = {
    shared.write().message = "mapped".to_string();
    shared.map_read(|ctx| &ctx.message).clone()
  };
  assert_eq!(message, "mapped");

  // Still shared with `handle`, so the data stays put.
  let shared = shared.try_unwrap().unwrap_err();
  drop(handle);
  let ctx = shared.try_unwrap().expect("last handle");
  assert_eq!(ctx.counter, 7);
}
