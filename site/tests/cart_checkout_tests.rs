// tests/cart_checkout_tests.rs
#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::*;
use storefront_site::models::OrderStatus;
use uuid::Uuid;

#[actix_rt::test]
async fn test_add_to_cart_issues_cookie_and_prices_the_cart() {
  // $5.00 flat shipping, 8.25% tax.
  let state = state_with_pricing(500, 825);
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", CANDLES_ID), ("quantity", "2")]).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  assert_eq!(location(&resp), "/cart");
  let cookie = cart_cookie(&resp).expect("new visitors get a cart cookie");
  assert_eq!(cookie.http_only(), Some(true));
  assert_eq!(cookie.path(), Some("/"));

  let cart = state.carts.snapshot(cart_id_of(&cookie));
  assert_eq!(cart.item_count(), 2);
  assert_eq!(cart.subtotal_cents, 4800);
  assert_eq!(cart.shipping_cents, 500);
  assert_eq!(cart.tax_cents, 396);
  assert_eq!(cart.total_cents, 5696);

  let resp = test::call_service(&app, get_with_cookie("/cart", &cookie).to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert!(cart_cookie(&resp).is_none(), "known carts are not re-issued a cookie");
  let body = body_string(resp).await;
  assert!(body.contains("Cart (2)"));
  assert!(body.contains("Beeswax Candle Trio"));
  assert!(body.contains("<dt>Total</dt><dd>$56.96</dd>"));
}

#[actix_rt::test]
async fn test_same_product_and_options_merge_into_one_line() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form(
      "/cart/add",
      None,
      &[("product_id", TOTE_ID), ("quantity", "1"), ("option.Colour", "Natural")],
    )
    .to_request(),
  )
  .await;
  let cookie = cart_cookie(&resp).unwrap();

  for (colour, quantity) in [("Natural", "2"), ("Olive", "1")] {
    let resp = test::call_service(
      &app,
      post_form(
        "/cart/add",
        Some(&cookie),
        &[("product_id", TOTE_ID), ("quantity", quantity), ("option.Colour", colour)],
      )
      .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  }

  let cart = state.carts.snapshot(cart_id_of(&cookie));
  assert_eq!(cart.items.len(), 2);
  let natural = cart
    .items
    .iter()
    .find(|i| i.selected_options.get("Colour").map(String::as_str) == Some("Natural"))
    .unwrap();
  assert_eq!(natural.quantity, 3);
  assert_eq!(cart.item_count(), 4);
  assert_eq!(cart.subtotal_cents, 4 * 3900);
}

#[actix_rt::test]
async fn test_add_to_cart_rejections_rerender_the_product_page() {
  let state = test_state();
  let app = test_app!(state);

  let cases: [(&[(&str, &str)], &str); 5] = [
    (&[("product_id", TOTE_ID), ("quantity", "1")], "Please choose a colour."),
    (
      &[("product_id", TOTE_ID), ("quantity", "1"), ("option.Colour", "Purple")],
      "is not an available colour.",
    ),
    (&[("product_id", CANDLES_ID), ("quantity", "0")], "Quantity must be at least 1."),
    (
      &[("product_id", POUR_OVER_ID), ("quantity", "9")],
      "Only 8 of Ceramic Pour-Over Set left in stock",
    ),
    (&[("product_id", SERVING_BOARD_ID), ("quantity", "1")], "Walnut Serving Board is out of stock."),
  ];

  for (fields, message) in cases {
    let resp = test::call_service(&app, post_form("/cart/add", None, fields).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{:?}", fields);
    assert!(cart_cookie(&resp).is_none(), "rejected adds do not start a cart");
    let body = body_string(resp).await;
    assert!(body.contains(message), "expected '{}' for {:?}", message, fields);
    assert_eq!(count(&body, "<header"), 1);
  }
  assert!(state.carts.is_empty());
}

#[actix_rt::test]
async fn test_add_unknown_or_malformed_product() {
  let state = test_state();
  let app = test_app!(state);

  let unknown = Uuid::new_v4().to_string();
  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", unknown.as_str()), ("quantity", "1")]).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", "not-a-uuid"), ("quantity", "1")]).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn test_stock_bounds_units_across_lines() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", POUR_OVER_ID), ("quantity", "6")]).to_request(),
  )
  .await;
  let cookie = cart_cookie(&resp).unwrap();

  let resp = test::call_service(
    &app,
    post_form("/cart/add", Some(&cookie), &[("product_id", POUR_OVER_ID), ("quantity", "3")]).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  let body = body_string(resp).await;
  assert!(body.contains("(6 already in your cart)"));
  assert_eq!(state.carts.snapshot(cart_id_of(&cookie)).item_count(), 6);
}

#[actix_rt::test]
async fn test_update_and_remove_lines() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", CANDLES_ID), ("quantity", "1")]).to_request(),
  )
  .await;
  let cookie = cart_cookie(&resp).unwrap();
  let cart_id = cart_id_of(&cookie);
  let line_id = state.carts.snapshot(cart_id).items[0].line_id.to_string();

  let resp = test::call_service(
    &app,
    post_form("/cart/update", Some(&cookie), &[("line_id", line_id.as_str()), ("quantity", "4")]).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  assert_eq!(state.carts.snapshot(cart_id).item_count(), 4);

  let resp = test::call_service(
    &app,
    post_form("/cart/update", Some(&cookie), &[("line_id", line_id.as_str()), ("quantity", "41")]).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  assert!(body_string(resp).await.contains("Only 40 of Beeswax Candle Trio in stock."));

  let resp = test::call_service(
    &app,
    post_form("/cart/update", Some(&cookie), &[("line_id", line_id.as_str()), ("quantity", "0")]).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  assert!(state.carts.snapshot(cart_id).is_empty());

  // A second remove of the same line is harmless.
  for _ in 0..2 {
    let resp = test::call_service(
      &app,
      post_form("/cart/remove", Some(&cookie), &[("line_id", line_id.as_str())]).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/cart");
  }
}

#[actix_rt::test]
async fn test_checkout_with_empty_cart_is_rejected() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form("/checkout", None, &valid_checkout_form("ada@example.com", "card")).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  assert!(body_string(resp).await.contains("Your cart is empty."));
  assert_eq!(state.orders.count(), 0);
}

#[actix_rt::test]
async fn test_checkout_validation_errors_keep_the_cart() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", CANDLES_ID), ("quantity", "1")]).to_request(),
  )
  .await;
  let cookie = cart_cookie(&resp).unwrap();

  let fields = [
    ("billing_full_name", "Ada Lovelace"),
    ("billing_email", "not-an-email"),
    ("payment_method", "card"),
  ];
  let resp = test::call_service(&app, post_form("/checkout", Some(&cookie), &fields).to_request()).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  let body = body_string(resp).await;
  assert!(body.contains("Street address is required."));
  assert!(body.contains("A valid email address is required."));
  // "Ship to billing" was left unticked, so the blank shipping address is validated too.
  assert!(body.contains("Postal code is required."));
  assert!(body.contains("aria-invalid=\"true\""));
  // Submitted values are kept.
  assert!(body.contains("value=\"Ada Lovelace\""));

  assert_eq!(state.orders.count(), 0);
  assert_eq!(state.carts.snapshot(cart_id_of(&cookie)).item_count(), 1);
}

#[actix_rt::test]
async fn test_checkout_places_order_and_clears_cart() {
  let state = state_with_pricing(500, 825);
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", CANDLES_ID), ("quantity", "2")]).to_request(),
  )
  .await;
  let cookie = cart_cookie(&resp).unwrap();
  let stock_before = state.catalog.get(Uuid::parse_str(CANDLES_ID).unwrap()).unwrap().stock;

  let resp = test::call_service(
    &app,
    post_form(
      "/checkout",
      Some(&cookie),
      &valid_checkout_form("ada@example.com", "cash_on_delivery"),
    )
    .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  let order_path = location(&resp);
  assert!(order_path.starts_with("/orders/"));
  let order_id = Uuid::parse_str(order_path.trim_start_matches("/orders/")).unwrap();

  let order = state.orders.get(order_id).expect("order stored");
  assert_eq!(order.number, "SF-000001");
  assert_eq!(order.status, OrderStatus::Placed);
  assert_eq!(order.total_cents(), 5696);
  assert_eq!(order.checkout.shipping_address().city, "London");

  let stock_after = state.catalog.get(Uuid::parse_str(CANDLES_ID).unwrap()).unwrap().stock;
  assert_eq!(stock_after, stock_before - 2);
  assert!(state.carts.snapshot(cart_id_of(&cookie)).is_empty());
  assert!(state
    .mailer
    .outbox()
    .iter()
    .any(|mail| mail.to == "ada@example.com" && mail.subject.contains("SF-000001")));

  let resp = test::call_service(&app, get_with_cookie(&order_path, &cookie).to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = body_string(resp).await;
  assert!(body.contains("Order SF-000001"));
  assert!(body.contains("Status: Placed"));
  assert!(body.contains("$56.96"));
  assert!(!body.contains("Cart ("), "cart badge is empty after checkout");
}

#[actix_rt::test]
async fn test_card_orders_await_payment() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", CANDLES_ID), ("quantity", "1")]).to_request(),
  )
  .await;
  let cookie = cart_cookie(&resp).unwrap();
  let resp = test::call_service(
    &app,
    post_form("/checkout", Some(&cookie), &valid_checkout_form("grace@example.com", "card")).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);

  let order_id = Uuid::parse_str(location(&resp).trim_start_matches("/orders/")).unwrap();
  assert_eq!(state.orders.get(order_id).unwrap().status, OrderStatus::AwaitingPayment);
}

#[actix_rt::test]
async fn test_failed_confirmation_mail_does_not_fail_checkout() {
  setup_tracing();
  // The mock mailer rejects subjects containing "fail_test"; the site name is part of the subject.
  let config = storefront_site::AppConfig {
    site_name: "fail_test shop".to_string(),
    ..storefront_site::AppConfig::local()
  };
  let state = storefront_site::AppState::build(config, storefront_site::services::Catalog::embedded().unwrap());
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", CANDLES_ID), ("quantity", "1")]).to_request(),
  )
  .await;
  let cookie = cart_cookie(&resp).unwrap();
  let resp = test::call_service(
    &app,
    post_form("/checkout", Some(&cookie), &valid_checkout_form("ada@example.com", "bank_transfer")).to_request(),
  )
  .await;

  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  assert_eq!(state.orders.count(), 1);
  assert_eq!(state.mailer.sent_count(), 0);
  assert!(state.carts.snapshot(cart_id_of(&cookie)).is_empty());
}

#[actix_rt::test]
async fn test_cart_edits_without_a_cart_store_nothing() {
  let state = test_state();
  let app = test_app!(state);

  for _ in 0..3 {
    let line_id = Uuid::new_v4().to_string();
    let resp = test::call_service(
      &app,
      post_form("/cart/remove", None, &[("line_id", line_id.as_str())]).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(cart_cookie(&resp).is_none());

    let resp = test::call_service(
      &app,
      post_form("/cart/update", None, &[("line_id", line_id.as_str()), ("quantity", "2")]).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_string(resp).await.contains("That item is no longer in your cart."));
  }
  assert_eq!(state.carts.len(), 0);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/admin/dashboard").to_request()).await;
  assert!(body_string(resp).await.contains("<dt>Open carts</dt><dd>0</dd>"));
}

#[actix_rt::test]
async fn test_checkout_leaves_no_cart_behind() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", CANDLES_ID), ("quantity", "1")]).to_request(),
  )
  .await;
  let cookie = cart_cookie(&resp).unwrap();
  assert_eq!(state.carts.len(), 1);

  let resp = test::call_service(
    &app,
    post_form("/checkout", Some(&cookie), &valid_checkout_form("ada@example.com", "card")).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  assert_eq!(state.carts.len(), 0);

  // Editing the spent cart id does not bring it back.
  let line_id = Uuid::new_v4().to_string();
  let resp = test::call_service(
    &app,
    post_form("/cart/remove", Some(&cookie), &[("line_id", line_id.as_str())]).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  assert_eq!(state.carts.len(), 0);
}

#[actix_rt::test]
async fn test_double_submitted_checkout_places_one_order() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", CANDLES_ID), ("quantity", "2")]).to_request(),
  )
  .await;
  let cookie = cart_cookie(&resp).unwrap();
  let stock_before = state.catalog.get(Uuid::parse_str(CANDLES_ID).unwrap()).unwrap().stock;

  let fields = valid_checkout_form("ada@example.com", "cash_on_delivery");
  let (first, second) = futures_util::future::join(
    test::call_service(&app, post_form("/checkout", Some(&cookie), &fields).to_request()),
    test::call_service(&app, post_form("/checkout", Some(&cookie), &fields).to_request()),
  )
  .await;

  let mut statuses = vec![first.status(), second.status()];
  statuses.sort();
  assert_eq!(statuses, vec![StatusCode::SEE_OTHER, StatusCode::UNPROCESSABLE_ENTITY]);
  assert_eq!(state.orders.count(), 1);
  let stock_after = state.catalog.get(Uuid::parse_str(CANDLES_ID).unwrap()).unwrap().stock;
  assert_eq!(stock_after, stock_before - 2);
}

#[actix_rt::test]
async fn test_rejected_checkout_returns_the_cart() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", CANDLES_ID), ("quantity", "3")]).to_request(),
  )
  .await;
  let cookie = cart_cookie(&resp).unwrap();

  let mut fields = valid_checkout_form("ada@example.com", "card");
  fields.retain(|(name, _)| *name != "billing_city");
  let resp = test::call_service(&app, post_form("/checkout", Some(&cookie), &fields).to_request()).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  let body = body_string(resp).await;
  assert!(body.contains("City is required."));
  // The form is re-rendered with the cart still listed.
  assert!(body.contains("Beeswax Candle Trio"));

  assert_eq!(state.carts.len(), 1);
  assert_eq!(state.carts.snapshot(cart_id_of(&cookie)).item_count(), 3);
  assert_eq!(state.orders.count(), 0);
}

#[actix_rt::test]
async fn test_unknown_payment_method_re_renders_the_form() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", CANDLES_ID), ("quantity", "1")]).to_request(),
  )
  .await;
  let cookie = cart_cookie(&resp).unwrap();

  let resp = test::call_service(
    &app,
    post_form("/checkout", Some(&cookie), &valid_checkout_form("ada@example.com", "bitcoin")).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  let body = body_string(resp).await;
  assert!(body.contains("Choose one of the listed payment methods."));
  assert!(body.contains("value=\"Ada Lovelace\""));
  assert_eq!(state.orders.count(), 0);
  assert_eq!(state.carts.snapshot(cart_id_of(&cookie)).item_count(), 1);
}
