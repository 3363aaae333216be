// storefront-site/src/web/handlers/cart_handlers.rs

use super::page_handlers::{product_view, render_product};
use super::{chrome_for, html};
use crate::errors::AppError;
use crate::models::{CartError, FieldErrors, SelectedOptions};
use crate::pages::shop::OPTION_FIELD_PREFIX;
use crate::pages::CartView;
use crate::state::AppState;
use crate::web::extractors::CartSession;
use crate::workflows::AddToCartCtx;
use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use std::collections::HashMap;
use storefront_core::{Outcome, Shared};
use tracing::{info, instrument, warn};
use uuid::Uuid;

pub async fn view_cart(req: HttpRequest, state: web::Data<AppState>, session: CartSession) -> Result<HttpResponse, AppError> {
  render_cart(&req, &state, &session, FieldErrors::default(), StatusCode::OK)
}

/// Parsed add-to-cart form. Option choices arrive as `option.<Name>` fields,
/// so the body is read as a plain map.
#[derive(Debug)]
pub struct AddToCartRequest {
  pub product_id: Uuid,
  pub quantity: u32,
  pub options: SelectedOptions,
}

impl AddToCartRequest {
  pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, AppError> {
    let product_id = fields
      .get("product_id")
      .and_then(|id| Uuid::parse_str(id.trim()).ok())
      .ok_or_else(|| AppError::Validation("The product to add is missing or malformed.".to_string()))?;
    // Unparseable quantities become 0 and are rejected by the workflow.
    let quantity = match fields.get("quantity") {
      Some(raw) => raw.trim().parse::<u32>().unwrap_or(0),
      None => 1,
    };
    let options = fields
      .iter()
      .filter_map(|(key, value)| {
        key
          .strip_prefix(OPTION_FIELD_PREFIX)
          .map(|name| (name.to_string(), value.trim().to_string()))
      })
      .filter(|(_, value)| !value.is_empty())
      .collect();
    Ok(Self {
      product_id,
      quantity,
      options,
    })
  }
}

#[instrument(name = "handler::add_to_cart", skip(req, state, session, form), fields(cart_id = %session.cart_id))]
pub async fn add_to_cart(
  req: HttpRequest,
  state: web::Data<AppState>,
  session: CartSession,
  form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
  let request = AddToCartRequest::from_fields(&form)?;
  let product_id = request.product_id;
  info!(%product_id, quantity = request.quantity, "Add to cart attempt.");

  let ctx = Shared::new(AddToCartCtx::new(
    state.get_ref().clone(),
    session.cart_id,
    request.product_id,
    request.quantity,
    request.options,
  ));

  match state.workflows.run(ctx.clone()).await? {
    Outcome::Completed => {
      let mut response = HttpResponse::SeeOther();
      session.issue_cookie(&mut response);
      Ok(response.insert_header((header::LOCATION, "/cart")).finish())
    }
    Outcome::Halted => {
      let errors = ctx.read().errors.clone();
      warn!(errors = %errors.summary(), "Add to cart rejected.");
      match state.catalog.get(product_id) {
        // Re-render the product page the form was posted from.
        Some(product) => {
          let mut view = product_view(&req, &state, &session, &product.slug)?;
          view.cart_errors = errors;
          render_product(&state, &view, StatusCode::UNPROCESSABLE_ENTITY)
        }
        None => render_cart(&req, &state, &session, errors, StatusCode::UNPROCESSABLE_ENTITY),
      }
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct UpdateLineForm {
  pub line_id: Uuid,
  pub quantity: u32,
}

#[instrument(name = "handler::update_cart", skip(req, state, session), fields(cart_id = %session.cart_id))]
pub async fn update_cart(
  req: HttpRequest,
  state: web::Data<AppState>,
  session: CartSession,
  form: web::Form<UpdateLineForm>,
) -> Result<HttpResponse, AppError> {
  let rules = state.pricing();
  let catalog = state.catalog.clone();
  let result = state
    .carts
    .update_existing(session.cart_id, |cart| {
      let product_id = cart.line(form.line_id).map(|line| line.product.id);
      let stock = product_id.and_then(|id| catalog.get(id)).map_or(0, |p| p.stock);
      cart.set_quantity(form.line_id, form.quantity, stock, &rules)
    })
    .unwrap_or(Err(CartError::LineNotFound));

  match result {
    Ok(()) => {
      info!(line_id = %form.line_id, quantity = form.quantity, "Cart line updated.");
      Ok(super::see_other("/cart"))
    }
    Err(err) => {
      let mut errors = FieldErrors::default();
      errors.add("quantity", &err.to_string());
      render_cart(&req, &state, &session, errors, StatusCode::UNPROCESSABLE_ENTITY)
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct RemoveLineForm {
  pub line_id: Uuid,
}

#[instrument(name = "handler::remove_from_cart", skip(state, session), fields(cart_id = %session.cart_id))]
pub async fn remove_from_cart(
  state: web::Data<AppState>,
  session: CartSession,
  form: web::Form<RemoveLineForm>,
) -> Result<HttpResponse, AppError> {
  let rules = state.pricing();
  // Removing a line that is already gone (double submit) is not an error.
  let result = state
    .carts
    .update_existing(session.cart_id, |cart| cart.remove(form.line_id, &rules))
    .unwrap_or(Err(CartError::LineNotFound));
  if let Err(err) = result {
    warn!(line_id = %form.line_id, error = %err, "Nothing removed from cart.");
  }
  Ok(super::see_other("/cart"))
}

fn render_cart(
  req: &HttpRequest,
  state: &AppState,
  session: &CartSession,
  errors: FieldErrors,
  status: StatusCode,
) -> Result<HttpResponse, AppError> {
  let view = CartView {
    chrome: chrome_for(req, state, session),
    cart: state.carts.snapshot(session.cart_id),
    errors,
  };
  Ok(html(status, state.pages.cart.render(&view)?))
}
