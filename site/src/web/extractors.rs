// storefront-site/src/web/extractors.rs

use crate::state::AppState;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{FromRequest, HttpRequest, HttpResponseBuilder};
use std::convert::Infallible;
use tracing::debug;
use uuid::Uuid;

pub const CART_COOKIE: &str = "cart_id";

/// The visitor's cart id, read from the `cart_id` cookie.
///
/// A request without a valid cookie gets a fresh id. The cookie is only sent
/// back by handlers that touch the cart, via [`CartSession::issue_cookie`].
#[derive(Debug, Clone, Copy)]
pub struct CartSession {
  pub cart_id: Uuid,
  is_new: bool,
}

impl CartSession {
  /// Units in the visitor's cart, for the header badge.
  pub fn cart_count(&self, state: &AppState) -> u32 {
    if self.is_new {
      return 0;
    }
    state.carts.snapshot(self.cart_id).item_count()
  }

  /// Adds the `Set-Cookie` header when the id was issued by this request.
  pub fn issue_cookie(&self, response: &mut HttpResponseBuilder) {
    if !self.is_new {
      return;
    }
    let cookie = Cookie::build(CART_COOKIE, self.cart_id.to_string())
      .path("/")
      .http_only(true)
      .same_site(SameSite::Lax)
      .finish();
    response.cookie(cookie);
  }
}

impl FromRequest for CartSession {
  type Error = Infallible;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let existing = req
      .cookie(CART_COOKIE)
      .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());
    let session = match existing {
      Some(cart_id) => CartSession { cart_id, is_new: false },
      None => {
        let cart_id = Uuid::new_v4();
        debug!(%cart_id, "No cart cookie on request, issuing a new cart id.");
        CartSession { cart_id, is_new: true }
      }
    };
    futures_util::future::ready(Ok(session))
  }
}
