// tests/form_review_tests.rs
#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::*;
use storefront_site::models::ApplicationKind;
use uuid::Uuid;

#[actix_rt::test]
async fn test_application_forms_validate_per_program() {
  let state = test_state();
  let app = test_app!(state);

  // Vendors must name their company; everything else is filled in.
  let fields = [
    ("full_name", "Mira Patel"),
    ("email", "mira@example.com"),
    ("details", "Hand-thrown stoneware."),
    ("agree_terms", "on"),
  ];
  let resp = test::call_service(&app, post_form("/vendor-app", None, &fields).to_request()).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  let body = body_string(resp).await;
  assert!(body.contains("Please enter your company or brand name."));
  assert!(body.contains("value=\"Mira Patel\""));
  assert!(state.submissions.applications(None).is_empty());

  // The same answers are enough for the affiliate program.
  let resp = test::call_service(&app, post_form("/affiliates", None, &fields).to_request()).await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  assert_eq!(location(&resp), "/affiliates?submitted=1");

  let stored = state.submissions.applications(Some(ApplicationKind::Affiliate));
  assert_eq!(stored.len(), 1);
  assert_eq!(stored[0].full_name, "Mira Patel");
  assert!(stored[0].agreed_to_terms);

  // Team notification and applicant acknowledgement.
  let outbox = state.mailer.outbox();
  assert!(outbox.iter().any(|mail| mail.to == "team@example.com"));
  assert!(outbox.iter().any(|mail| mail.to == "mira@example.com"));

  let resp = test::call_service(&app, test::TestRequest::get().uri("/affiliates?submitted=1").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert!(body_string(resp).await.contains("Thanks for applying!"));
}

#[actix_rt::test]
async fn test_creator_programs_need_a_website_and_terms() {
  let state = test_state();
  let app = test_app!(state);

  for path in ["/blogger-app", "/content-creator-app"] {
    let fields = [("full_name", "Sam Rivera"), ("email", "sam@example.com"), ("details", "Weekly craft videos.")];
    let resp = test::call_service(&app, post_form(path, None, &fields).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "POST {}", path);
    let body = body_string(resp).await;
    assert!(body.contains("Please link to your blog or channel."));
    assert!(body.contains("You need to accept the program terms."));
  }

  let fields = [
    ("full_name", "Sam Rivera"),
    ("email", "sam@example.com"),
    ("website", "https://sam.example.com"),
    ("details", "Weekly craft videos."),
    ("agree_terms", "on"),
  ];
  let resp = test::call_service(&app, post_form("/content-creator-app", None, &fields).to_request()).await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  assert_eq!(state.submissions.applications(Some(ApplicationKind::ContentCreator)).len(), 1);
  assert!(state.submissions.applications(Some(ApplicationKind::Blogger)).is_empty());
}

#[actix_rt::test]
async fn test_contact_form() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form("/contact", None, &[("name", ""), ("email", "bad"), ("message", "")]).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  let body = body_string(resp).await;
  assert!(body.contains("Please enter your name."));
  assert!(body.contains("Please enter a valid email address."));
  assert!(body.contains("Please enter a message."));
  assert_eq!(state.submissions.message_count(), 0);

  let resp = test::call_service(
    &app,
    post_form(
      "/contact",
      None,
      &[("name", "Lee"), ("email", "lee@example.com"), ("message", "Do you ship to Norway?")],
    )
    .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  assert_eq!(location(&resp), "/contact?submitted=1");

  let messages = state.submissions.messages();
  assert_eq!(messages.len(), 1);
  assert_eq!(messages[0].subject, "General enquiry");

  let body = body_string(test::call_service(&app, test::TestRequest::get().uri("/contact?submitted=1").to_request()).await).await;
  assert!(body.contains("Thanks for your message."));
}

#[actix_rt::test]
async fn test_reviews_update_rating_and_flag_verified_buyers() {
  let state = test_state();
  let app = test_app!(state);

  // Buy the candles first so the second review is from a verified buyer.
  let resp = test::call_service(
    &app,
    post_form("/cart/add", None, &[("product_id", CANDLES_ID), ("quantity", "1")]).to_request(),
  )
  .await;
  let cookie = cart_cookie(&resp).unwrap();
  let resp = test::call_service(
    &app,
    post_form("/checkout", Some(&cookie), &valid_checkout_form("buyer@example.com", "card")).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);

  let reviews = [
    ("Passer-by", "visitor@example.com", "4", "Smells lovely."),
    ("Buyer", "Buyer@Example.com", "5", "Burns clean and slow."),
  ];
  for (author, email, rating, comment) in reviews {
    let resp = test::call_service(
      &app,
      post_form(
        "/shop/beeswax-candle-trio/reviews",
        None,
        &[("author", author), ("email", email), ("rating", rating), ("comment", comment)],
      )
      .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/shop/beeswax-candle-trio#reviews");
  }

  let product = state.catalog.get(Uuid::parse_str(CANDLES_ID).unwrap()).unwrap();
  assert_eq!(product.review_count, 2);
  assert!((product.rating - 4.5).abs() < f32::EPSILON);

  let stored = state.catalog.reviews_for(product.id);
  let buyer = stored.iter().find(|r| r.author == "Buyer").unwrap();
  let visitor = stored.iter().find(|r| r.author == "Passer-by").unwrap();
  assert!(buyer.verified);
  assert!(!visitor.verified);

  let body = body_string(test::call_service(&app, test::TestRequest::get().uri("/shop/beeswax-candle-trio").to_request()).await).await;
  assert!(body.contains("4.5 from 2 reviews"));
  assert_eq!(count(&body, "Verified buyer"), 1);

  // Marking a review helpful moves it to the top.
  let resp = test::call_service(
    &app,
    post_form(&format!("/reviews/{}/helpful", visitor.id), None, &[]).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  let stored = state.catalog.reviews_for(product.id);
  assert_eq!(stored[0].author, "Passer-by");
  assert_eq!(stored[0].helpful_count, 1);
}

#[actix_rt::test]
async fn test_invalid_review_rerenders_product_page() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    post_form(
      "/shop/linen-tote-bag/reviews",
      None,
      &[("author", "Kim"), ("email", "kim@example.com"), ("rating", "9"), ("comment", "")],
    )
    .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  let body = body_string(resp).await;
  assert!(body.contains("Rating must be between 1 and 5 stars."));
  assert!(body.contains("Please write a short review."));
  assert!(body.contains("value=\"Kim\""));
  assert!(state.catalog.reviews_for(Uuid::parse_str(TOTE_ID).unwrap()).is_empty());

  let resp = test::call_service(
    &app,
    post_form(
      "/shop/no-such-thing/reviews",
      None,
      &[("author", "Kim"), ("email", "kim@example.com"), ("rating", "4"), ("comment", "Nice")],
    )
    .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let resp = test::call_service(
    &app,
    post_form(&format!("/reviews/{}/helpful", Uuid::new_v4()), None, &[]).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_non_numeric_rating_is_a_field_error() {
  let state = test_state();
  let app = test_app!(state);

  for rating in ["five", "", "-1", "300"] {
    let resp = test::call_service(
      &app,
      post_form(
        "/shop/linen-tote-bag/reviews",
        None,
        &[("author", "Kim"), ("email", "kim@example.com"), ("rating", rating), ("comment", "Sturdy.")],
      )
      .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "rating {:?}", rating);
    let body = body_string(resp).await;
    assert!(body.contains("Rating must be between 1 and 5 stars."));
    assert!(body.contains("Sturdy."));
  }
  assert!(state.catalog.reviews_for(Uuid::parse_str(TOTE_ID).unwrap()).is_empty());
}
