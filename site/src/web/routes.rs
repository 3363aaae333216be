// storefront-site/src/web/routes.rs

use crate::models::ApplicationKind;
use crate::web::handlers::{
  admin_handlers, cart_handlers, checkout_handlers, form_handlers, page_handlers, review_handlers, seo_handlers,
};
use actix_web::web;

// Called in `main.rs` (and the test harness) to configure the app's services.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    // Marketing pages
    .route("/", web::get().to(page_handlers::home))
    .route("/about", web::get().to(page_handlers::about))
    .route("/services", web::get().to(page_handlers::services))
    .service(
      web::resource("/contact")
        .route(web::get().to(page_handlers::contact))
        .route(web::post().to(form_handlers::submit_contact)),
    )
    // Shop and reviews
    .route("/shop", web::get().to(page_handlers::shop))
    .route("/shop/{slug}", web::get().to(page_handlers::product_detail))
    .route("/shop/{slug}/reviews", web::post().to(review_handlers::submit_review))
    .route("/reviews/{review_id}/helpful", web::post().to(review_handlers::mark_helpful))
    // Cart and checkout
    .service(
      web::scope("/cart")
        .route("", web::get().to(cart_handlers::view_cart))
        .route("/add", web::post().to(cart_handlers::add_to_cart))
        .route("/update", web::post().to(cart_handlers::update_cart))
        .route("/remove", web::post().to(cart_handlers::remove_from_cart)),
    )
    .service(
      web::resource("/checkout")
        .route(web::get().to(checkout_handlers::checkout_page))
        .route(web::post().to(checkout_handlers::place_order)),
    )
    .route("/orders/{order_id}", web::get().to(checkout_handlers::order_page))
    // Admin
    .route("/admin", web::get().to(admin_handlers::admin_redirect))
    .route(admin_handlers::DASHBOARD_PATH, web::get().to(admin_handlers::dashboard))
    // Crawlers and probes
    .route("/sitemap.xml", web::get().to(seo_handlers::sitemap))
    .route("/robots.txt", web::get().to(seo_handlers::robots))
    .route("/health", web::get().to(seo_handlers::health_check))
    .route(crate::pages::layout::STYLESHEET, web::get().to(seo_handlers::stylesheet));

  // One resource per partner program; the handler reads the kind from resource data.
  for kind in ApplicationKind::ALL {
    cfg.service(
      web::resource(kind.path())
        .app_data(web::Data::new(kind))
        .route(web::get().to(form_handlers::application_page))
        .route(web::post().to(form_handlers::submit_application)),
    );
  }
}
