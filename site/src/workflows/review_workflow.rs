// storefront-site/src/workflows/review_workflow.rs

use crate::errors::AppError;
use crate::models::Review;
use crate::workflows::common_steps::halt_on_errors;
use crate::workflows::contexts::ReviewCtx;
use chrono::Utc;
use storefront_core::{Flow, Registry, Shared, Workflow};
use tracing::info;
use uuid::Uuid;

pub fn build_review_workflow() -> Workflow<ReviewCtx, AppError> {
  let mut wf = Workflow::<ReviewCtx, AppError>::new(&[
    ("validate_review", false, None),
    ("ensure_product_exists", false, None),
    ("verify_purchase", false, None),
    ("store_review", false, None),
  ]);

  wf.on("validate_review", |ctx: Shared<ReviewCtx>| async move {
    let mut guard = ctx.write();
    let found = guard.input.validate();
    Ok::<_, AppError>(halt_on_errors(&mut guard.errors, found))
  });

  wf.on("ensure_product_exists", |ctx: Shared<ReviewCtx>| async move {
    let mut guard = ctx.write();
    let product = guard
      .app_state
      .catalog
      .get_by_slug(&guard.product_slug)
      .ok_or_else(|| AppError::NotFound(format!("No product at /shop/{}.", guard.product_slug)))?;
    guard.product = Some(product);
    Ok::<_, AppError>(Flow::Continue)
  });

  wf.on("verify_purchase", |ctx: Shared<ReviewCtx>| async move {
    let mut guard = ctx.write();
    let product_id = guard
      .product
      .as_ref()
      .map(|p| p.id)
      .ok_or_else(|| AppError::Internal("Product missing after lookup stage.".to_string()))?;
    let verified = guard.app_state.orders.has_purchased(&guard.input.email, product_id);
    guard.verified = verified;
    Ok::<_, AppError>(Flow::Continue)
  });

  wf.on("store_review", |ctx: Shared<ReviewCtx>| async move {
    let mut guard = ctx.write();
    let product_id = guard
      .product
      .as_ref()
      .map(|p| p.id)
      .ok_or_else(|| AppError::Internal("Product missing after lookup stage.".to_string()))?;
    let review = Review {
      id: Uuid::new_v4(),
      product_id,
      author: guard.input.author.trim().to_string(),
      rating: guard.input.rating,
      title: guard.input.title.trim().to_string(),
      comment: guard.input.comment.trim().to_string(),
      helpful_count: 0,
      verified: guard.verified,
      created_at: Utc::now(),
    };
    guard.app_state.catalog.add_review(review.clone())?;
    info!(review_id = %review.id, %product_id, rating = review.rating, verified = review.verified, "Review stored.");
    guard.review = Some(review);
    Ok::<_, AppError>(Flow::Continue)
  });

  wf
}

pub fn register_review_workflow(registry: &Registry<AppError>) {
  registry.register(build_review_workflow());
  info!("Review workflow registered.");
}
