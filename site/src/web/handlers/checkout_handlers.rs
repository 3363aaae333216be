// storefront-site/src/web/handlers/checkout_handlers.rs

use super::{chrome_for, html, see_other};
use crate::errors::AppError;
use crate::models::{CheckoutForm, FieldErrors};
use crate::pages::{CheckoutView, OrderView};
use crate::state::AppState;
use crate::web::extractors::CartSession;
use crate::workflows::checkout_workflow::release_cart;
use crate::workflows::CheckoutCtx;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use storefront_core::{Outcome, Shared};
use tracing::{info, instrument, warn};
use uuid::Uuid;

pub async fn checkout_page(
  req: HttpRequest,
  state: web::Data<AppState>,
  session: CartSession,
) -> Result<HttpResponse, AppError> {
  render_checkout(&req, &state, &session, CheckoutForm::blank(), FieldErrors::default(), StatusCode::OK)
}

#[instrument(name = "handler::place_order", skip(req, state, session, form), fields(cart_id = %session.cart_id))]
pub async fn place_order(
  req: HttpRequest,
  state: web::Data<AppState>,
  session: CartSession,
  form: web::Form<CheckoutForm>,
) -> Result<HttpResponse, AppError> {
  let form = form.into_inner();
  info!(payment_method = form.payment_method.map_or("unknown", |m| m.as_str()), "Checkout attempt.");

  let ctx = Shared::new(
    CheckoutCtx::new(state.get_ref().clone(), session.cart_id, form.to_data()).with_input_errors(form.input_errors()),
  );

  let outcome = state.workflows.run(ctx.clone()).await;
  release_cart(&ctx);
  match outcome? {
    Outcome::Completed => {
      let (order, confirmation_sent) = {
        let guard = ctx.read();
        (guard.order.clone(), guard.confirmation_sent)
      };
      let order = order.ok_or_else(|| {
        warn!("Checkout workflow completed without an order.");
        AppError::Internal("Checkout completed, but the order is unavailable.".to_string())
      })?;
      info!(order_id = %order.id, number = %order.number, confirmation_sent, "Checkout completed.");
      Ok(see_other(&format!("/orders/{}", order.id)))
    }
    Outcome::Halted => {
      let errors = ctx.read().errors.clone();
      warn!(errors = %errors.summary(), "Checkout rejected.");
      render_checkout(&req, &state, &session, form, errors, StatusCode::UNPROCESSABLE_ENTITY)
    }
  }
}

#[instrument(name = "handler::order", skip(req, state, session))]
pub async fn order_page(
  req: HttpRequest,
  state: web::Data<AppState>,
  session: CartSession,
  order_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let order = state
    .orders
    .get(*order_id)
    .ok_or_else(|| AppError::NotFound(format!("Order {} not found.", order_id)))?;
  let view = OrderView {
    chrome: chrome_for(&req, &state, &session),
    order,
  };
  Ok(html(StatusCode::OK, state.pages.order.render(&view)?))
}

fn render_checkout(
  req: &HttpRequest,
  state: &AppState,
  session: &CartSession,
  form: CheckoutForm,
  errors: FieldErrors,
  status: StatusCode,
) -> Result<HttpResponse, AppError> {
  let mut cart = state.carts.snapshot(session.cart_id);
  cart.reprice(&state.pricing());
  let view = CheckoutView {
    chrome: chrome_for(req, state, session),
    cart,
    form,
    errors,
  };
  Ok(html(status, state.pages.checkout.render(&view)?))
}
