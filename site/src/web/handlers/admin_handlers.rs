// storefront-site/src/web/handlers/admin_handlers.rs

use super::{chrome_for, html};
use crate::errors::AppError;
use crate::pages::{DashboardStats, DashboardView};
use crate::state::AppState;
use crate::web::extractors::CartSession;
use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};

pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// `/admin` has no page of its own.
pub async fn admin_redirect() -> HttpResponse {
  HttpResponse::PermanentRedirect()
    .insert_header((header::LOCATION, DASHBOARD_PATH))
    .finish()
}

pub async fn dashboard(req: HttpRequest, state: web::Data<AppState>, session: CartSession) -> Result<HttpResponse, AppError> {
  let products = state.catalog.list(None);
  let stats = DashboardStats {
    order_count: state.orders.count(),
    revenue_cents: state.orders.revenue_cents(),
    applications: state.submissions.application_counts(),
    message_count: state.submissions.message_count(),
    product_count: products.len(),
    out_of_stock: products.iter().filter(|p| !p.in_stock()).count(),
    open_carts: state.carts.len(),
  };
  let view = DashboardView {
    chrome: chrome_for(&req, &state, &session),
    stats,
  };
  Ok(html(StatusCode::OK, state.pages.dashboard.render(&view)?))
}
