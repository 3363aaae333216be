// storefront-site/src/web/handlers/page_handlers.rs

//! Read-only pages: marketing pages, the shop and product details.

use super::{chrome_for, html};
use crate::errors::AppError;
use crate::pages::{ContactView, ProductView, ShopView, StaticView};
use crate::state::AppState;
use crate::web::extractors::CartSession;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::{debug, instrument};

pub async fn home(req: HttpRequest, state: web::Data<AppState>, session: CartSession) -> Result<HttpResponse, AppError> {
  let view = StaticView {
    chrome: chrome_for(&req, &state, &session),
  };
  Ok(html(StatusCode::OK, state.pages.home.render(&view)?))
}

pub async fn about(req: HttpRequest, state: web::Data<AppState>, session: CartSession) -> Result<HttpResponse, AppError> {
  let view = StaticView {
    chrome: chrome_for(&req, &state, &session),
  };
  Ok(html(StatusCode::OK, state.pages.about.render(&view)?))
}

pub async fn services(
  req: HttpRequest,
  state: web::Data<AppState>,
  session: CartSession,
) -> Result<HttpResponse, AppError> {
  let view = StaticView {
    chrome: chrome_for(&req, &state, &session),
  };
  Ok(html(StatusCode::OK, state.pages.services.render(&view)?))
}

#[derive(Debug, Deserialize)]
pub struct SubmittedQuery {
  #[serde(default)]
  pub submitted: Option<u8>,
}

pub async fn contact(
  req: HttpRequest,
  state: web::Data<AppState>,
  session: CartSession,
  query: web::Query<SubmittedQuery>,
) -> Result<HttpResponse, AppError> {
  let mut chrome = chrome_for(&req, &state, &session);
  if query.submitted.is_some() {
    chrome = chrome.with_notice("Thanks for your message. We'll be in touch soon.");
  }
  let view = ContactView {
    chrome,
    ..ContactView::default()
  };
  Ok(html(StatusCode::OK, state.pages.contact.render(&view)?))
}

#[derive(Debug, Deserialize)]
pub struct ShopQuery {
  pub category: Option<String>,
}

#[instrument(name = "handler::shop", skip(req, state, session, query), fields(category = ?query.category))]
pub async fn shop(
  req: HttpRequest,
  state: web::Data<AppState>,
  session: CartSession,
  query: web::Query<ShopQuery>,
) -> Result<HttpResponse, AppError> {
  let category = query
    .category
    .as_deref()
    .map(str::trim)
    .filter(|c| !c.is_empty())
    .map(str::to_string);
  let products = state.catalog.list(category.as_deref());
  debug!(count = products.len(), "Products listed.");
  let view = ShopView {
    chrome: chrome_for(&req, &state, &session),
    products,
    categories: state.catalog.categories(),
    active_category: category,
  };
  Ok(html(StatusCode::OK, state.pages.shop.render(&view)?))
}

#[instrument(name = "handler::product_detail", skip(req, state, session))]
pub async fn product_detail(
  req: HttpRequest,
  state: web::Data<AppState>,
  session: CartSession,
  slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let view = product_view(&req, &state, &session, &slug)?;
  render_product(&state, &view, StatusCode::OK)
}

/// Product page view with the product's current reviews.
pub(crate) fn product_view(
  req: &HttpRequest,
  state: &AppState,
  session: &CartSession,
  slug: &str,
) -> Result<ProductView, AppError> {
  let product = state
    .catalog
    .get_by_slug(slug)
    .ok_or_else(|| AppError::NotFound(format!("No product at /shop/{}.", slug)))?;
  let reviews = state.catalog.reviews_for(product.id);
  Ok(ProductView::new(chrome_for(req, state, session), product, reviews))
}

pub(crate) fn render_product(state: &AppState, view: &ProductView, status: StatusCode) -> Result<HttpResponse, AppError> {
  let meta = state.pages.product_meta(&state.config, &view.product);
  Ok(html(status, state.pages.product.render_with_meta(view, &meta)?))
}
