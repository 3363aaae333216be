// storefront-site/src/workflows/mod.rs

//! Every workflow the site runs, and their registration.

use crate::errors::AppError;
use storefront_core::Registry;

pub mod common_steps;
pub mod contexts;

pub mod application_workflow;
pub mod cart_workflow;
pub mod checkout_workflow;
pub mod contact_workflow;
pub mod review_workflow;

pub use contexts::{AddToCartCtx, ApplicationCtx, CheckoutCtx, ContactCtx, ReviewCtx};

/// Registers all workflows. Called once while the application state is built.
pub fn register_all_workflows(registry: &Registry<AppError>) {
  tracing::info!("Registering workflows...");

  cart_workflow::register_add_to_cart_workflow(registry);
  checkout_workflow::register_checkout_workflow(registry);
  application_workflow::register_application_workflow(registry);
  contact_workflow::register_contact_workflow(registry);
  review_workflow::register_review_workflow(registry);

  tracing::info!(count = registry.len(), "All workflows registered.");
}
