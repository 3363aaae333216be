// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper.

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::test;
use once_cell::sync::Lazy;
use storefront_site::config::AppConfig;
use storefront_site::services::Catalog;
use storefront_site::AppState;

pub const TOTE_ID: &str = "5b1f3a52-8c2e-4d6a-9a3e-0f6d1c2b7a01";
pub const POUR_OVER_ID: &str = "5b1f3a52-8c2e-4d6a-9a3e-0f6d1c2b7a02";
pub const SWEATER_ID: &str = "5b1f3a52-8c2e-4d6a-9a3e-0f6d1c2b7a03";
pub const CANDLES_ID: &str = "5b1f3a52-8c2e-4d6a-9a3e-0f6d1c2b7a04";
pub const SERVING_BOARD_ID: &str = "5b1f3a52-8c2e-4d6a-9a3e-0f6d1c2b7a05";

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// State over the embedded catalog with the given pricing inputs.
pub fn state_with_pricing(shipping_flat_cents: i64, tax_rate_bps: u32) -> AppState {
  setup_tracing();
  let config = AppConfig {
    app_base_url: "https://shop.test".to_string(),
    shipping_flat_cents,
    tax_rate_bps,
    ..AppConfig::local()
  };
  AppState::build(config, Catalog::embedded().expect("embedded catalog parses"))
}

pub fn test_state() -> AppState {
  state_with_pricing(0, 0)
}

/// Initializes the app the way `main.rs` does, minus the request logger.
macro_rules! test_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state.clone()))
        .configure(storefront_site::web::configure_app_routes)
        .default_service(actix_web::web::to(storefront_site::web::handlers::not_found)),
    )
    .await
  };
}

pub async fn body_string(resp: ServiceResponse) -> String {
  let bytes = test::read_body(resp).await;
  String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(resp: &ServiceResponse) -> String {
  resp
    .headers()
    .get(header::LOCATION)
    .expect("Location header")
    .to_str()
    .expect("ascii Location")
    .to_string()
}

/// The `cart_id` cookie set by the response, if any.
pub fn cart_cookie(resp: &ServiceResponse) -> Option<Cookie<'static>> {
  resp
    .response()
    .cookies()
    .find(|c| c.name() == storefront_site::web::extractors::CART_COOKIE)
    .map(|c| c.into_owned())
}

pub fn count(haystack: &str, needle: &str) -> usize {
  haystack.matches(needle).count()
}

/// A checkout body that passes validation, shipping to the billing address.
pub fn valid_checkout_form(email: &'static str, payment_method: &'static str) -> Vec<(&'static str, &'static str)> {
  vec![
    ("billing_full_name", "Ada Lovelace"),
    ("billing_line1", "12 Analytical Row"),
    ("billing_city", "London"),
    ("billing_postal_code", "N1 7AA"),
    ("billing_country", "United Kingdom"),
    ("billing_email", email),
    ("billing_phone", "+44 20 7946 0000"),
    ("shipping_same_as_billing", "on"),
    ("payment_method", payment_method),
  ]
}

/// A form POST, carrying the cart cookie when there is one.
pub fn post_form(uri: &str, cookie: Option<&Cookie<'static>>, fields: &[(&str, &str)]) -> test::TestRequest {
  let mut req = test::TestRequest::post().uri(uri).set_form(fields);
  if let Some(cookie) = cookie {
    req = req.cookie(cookie.clone());
  }
  req
}

pub fn get_with_cookie(uri: &str, cookie: &Cookie<'static>) -> test::TestRequest {
  test::TestRequest::get().uri(uri).cookie(cookie.clone())
}

pub fn cart_id_of(cookie: &Cookie<'static>) -> uuid::Uuid {
  uuid::Uuid::parse_str(cookie.value()).expect("cart cookie holds a uuid")
}
