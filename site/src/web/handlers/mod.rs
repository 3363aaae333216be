// storefront-site/src/web/handlers/mod.rs

pub mod admin_handlers;
pub mod cart_handlers;
pub mod checkout_handlers;
pub mod form_handlers;
pub mod page_handlers;
pub mod review_handlers;
pub mod seo_handlers;

use crate::errors::AppError;
use crate::pages::Chrome;
use crate::state::AppState;
use crate::web::extractors::CartSession;
use actix_web::http::header::{self, ContentType};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use storefront_core::Markup;

pub(crate) fn html(status: StatusCode, body: Markup) -> HttpResponse {
  HttpResponse::build(status)
    .content_type(ContentType::html())
    .body(body.into_string())
}

/// 303 to `location`, the answer to every successful form post.
pub(crate) fn see_other(location: &str) -> HttpResponse {
  HttpResponse::SeeOther()
    .insert_header((header::LOCATION, location))
    .finish()
}

pub(crate) fn chrome_for(req: &HttpRequest, state: &AppState, session: &CartSession) -> Chrome {
  Chrome::new(req.path(), session.cart_count(state))
}

/// Fallback for unknown routes.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
  Err(AppError::NotFound(format!("There is no page at {}.", req.path())))
}
