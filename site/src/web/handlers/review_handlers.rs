// storefront-site/src/web/handlers/review_handlers.rs

use super::page_handlers::{product_view, render_product};
use super::see_other;
use crate::errors::AppError;
use crate::models::NewReview;
use crate::state::AppState;
use crate::web::extractors::CartSession;
use crate::workflows::ReviewCtx;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use storefront_core::{Outcome, Shared};
use tracing::{info, instrument, warn};
use uuid::Uuid;

#[instrument(name = "handler::submit_review", skip(req, state, session, form))]
pub async fn submit_review(
  req: HttpRequest,
  state: web::Data<AppState>,
  session: CartSession,
  slug: web::Path<String>,
  form: web::Form<NewReview>,
) -> Result<HttpResponse, AppError> {
  let slug = slug.into_inner();
  let form = form.into_inner();
  let ctx = Shared::new(ReviewCtx::new(state.get_ref().clone(), slug.clone(), form.clone()));

  match state.workflows.run(ctx.clone()).await? {
    Outcome::Completed => {
      let verified = ctx.read().verified;
      info!(verified, "Review accepted.");
      Ok(see_other(&format!("/shop/{}#reviews", slug)))
    }
    Outcome::Halted => {
      let errors = ctx.read().errors.clone();
      warn!(errors = %errors.summary(), "Review rejected.");
      let mut view = product_view(&req, &state, &session, &slug)?;
      view.review_form = form;
      view.review_errors = errors;
      render_product(&state, &view, StatusCode::UNPROCESSABLE_ENTITY)
    }
  }
}

#[instrument(name = "handler::mark_review_helpful", skip(state))]
pub async fn mark_helpful(state: web::Data<AppState>, review_id: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
  let review = state.catalog.mark_helpful(*review_id)?;
  let slug = state
    .catalog
    .get(review.product_id)
    .map(|p| p.slug)
    .ok_or_else(|| AppError::NotFound(format!("Product {} not found.", review.product_id)))?;
  info!(helpful_count = review.helpful_count, "Review marked helpful.");
  Ok(see_other(&format!("/shop/{}#reviews", slug)))
}
