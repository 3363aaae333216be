// tests/page_tests.rs
#[macro_use]
mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test;
use chrono::DateTime;
use common::*;

#[actix_rt::test]
async fn test_every_page_has_one_header_and_one_footer() {
  let state = test_state();
  let app = test_app!(state);

  let paths = [
    "/",
    "/about",
    "/services",
    "/shop",
    "/shop?category=kitchen",
    "/shop/linen-tote-bag",
    "/cart",
    "/checkout",
    "/contact",
    "/affiliates",
    "/vendor-app",
    "/blogger-app",
    "/content-creator-app",
    "/admin/dashboard",
  ];
  for path in paths {
    let req = test::TestRequest::get().uri(path).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "GET {}", path);
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "{} served {}", path, content_type);

    let body = body_string(resp).await;
    assert!(body.starts_with("<!DOCTYPE html>"), "{}", path);
    assert_eq!(count(&body, "<header"), 1, "header count on {}", path);
    assert_eq!(count(&body, "<footer"), 1, "footer count on {}", path);
    assert_eq!(count(&body, "<main>"), 1, "main count on {}", path);
    assert!(body.contains(r#"<link rel="stylesheet" href="/static/site.css">"#), "{}", path);
  }
}

#[actix_rt::test]
async fn test_page_titles_and_canonical_urls() {
  let state = test_state();
  let app = test_app!(state);

  let body = body_string(test::call_service(&app, test::TestRequest::get().uri("/about").to_request()).await).await;
  assert!(body.contains("<title>About us | Storefront</title>"));
  assert!(body.contains(r#"<link rel="canonical" href="https://shop.test/about">"#));

  let body =
    body_string(test::call_service(&app, test::TestRequest::get().uri("/shop/linen-tote-bag").to_request()).await).await;
  assert!(body.contains("<title>Linen Tote Bag | Storefront</title>"));
  assert!(body.contains(r#"<link rel="canonical" href="https://shop.test/shop/linen-tote-bag">"#));
}

#[actix_rt::test]
async fn test_testimonials_are_switched_off() {
  let state = test_state();
  assert!(state.pages.home.section_names().contains(&"testimonials"));

  let app = test_app!(state);
  let body = body_string(test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await).await;
  assert!(!body.contains("class=\"testimonials\""));
}

#[actix_rt::test]
async fn test_current_nav_link_is_marked() {
  let state = test_state();
  let app = test_app!(state);

  let body = body_string(test::call_service(&app, test::TestRequest::get().uri("/shop/linen-tote-bag").to_request()).await).await;
  assert!(body.contains(r#"<a href="/shop" aria-current="page">"#));
  assert_eq!(count(&body, "aria-current"), 1);
}

#[actix_rt::test]
async fn test_shop_category_filter() {
  let state = test_state();
  let app = test_app!(state);

  let body = body_string(test::call_service(&app, test::TestRequest::get().uri("/shop?category=bags").to_request()).await).await;
  assert!(body.contains("Linen Tote Bag"));
  assert!(body.contains("Canvas Weekender"));
  assert!(!body.contains("Ceramic Pour-Over Set"));
}

#[actix_rt::test]
async fn test_admin_redirects_to_dashboard() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
  assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
  assert_eq!(location(&resp), "/admin/dashboard");
}

#[actix_rt::test]
async fn test_dashboard_shows_aggregates() {
  let state = test_state();
  let app = test_app!(state);

  let body = body_string(test::call_service(&app, test::TestRequest::get().uri("/admin/dashboard").to_request()).await).await;
  assert!(body.contains("<h1>Dashboard</h1>"));
  assert!(body.contains("<dt>Orders</dt><dd>0</dd>"));
  // The walnut board ships with zero stock.
  assert!(body.contains("<dt>Sold out</dt><dd>1</dd>"));
  assert!(body.contains("<dt>Vendor applications</dt><dd>0</dd>"));
}

#[actix_rt::test]
async fn test_unknown_routes_and_products_are_404() {
  let state = test_state();
  let app = test_app!(state);

  for path in ["/nope", "/shop/not-a-product", "/orders/6c1f1e3a-0000-4000-8000-000000000000"] {
    let resp = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {}", path);
  }
}

#[actix_rt::test]
async fn test_sitemap_lists_public_routes() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/sitemap.xml").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().to_string();
  assert!(content_type.contains("xml"));
  let xml = body_string(resp).await;

  let expected = [
    "/",
    "/about",
    "/services",
    "/shop",
    "/cart",
    "/checkout",
    "/contact",
    "/affiliates",
    "/vendor-app",
    "/blogger-app",
    "/content-creator-app",
  ];
  assert_eq!(count(&xml, "<url>"), expected.len());
  for path in expected {
    let loc = format!("<loc>https://shop.test{}</loc>", path);
    assert!(xml.contains(&loc), "missing {}", loc);
  }
  assert!(!xml.contains("/admin"));

  for lastmod in xml.split("<lastmod>").skip(1) {
    let stamp = &lastmod[..lastmod.find("</lastmod>").unwrap()];
    assert!(DateTime::parse_from_rfc3339(stamp).is_ok(), "bad lastmod {}", stamp);
  }
  for priority in xml.split("<priority>").skip(1) {
    let value: f32 = priority[..priority.find("</priority>").unwrap()].parse().unwrap();
    assert!((0.0..=1.0).contains(&value));
  }
}

#[actix_rt::test]
async fn test_robots_health_and_stylesheet() {
  let state = test_state();
  let app = test_app!(state);

  let robots = body_string(test::call_service(&app, test::TestRequest::get().uri("/robots.txt").to_request()).await).await;
  assert!(robots.contains("Disallow: /admin"));
  assert!(robots.contains("Sitemap: https://shop.test/sitemap.xml"));

  let health: serde_json::Value =
    test::call_and_read_body_json(&app, test::TestRequest::get().uri("/health").to_request()).await;
  assert_eq!(health["status"], "ok");

  let resp = test::call_service(&app, test::TestRequest::get().uri("/static/site.css").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert!(resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().starts_with("text/css"));
}
