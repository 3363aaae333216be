// storefront-site/src/web/handlers/seo_handlers.rs

use crate::errors::AppError;
use crate::pages::build_sitemap;
use crate::state::AppState;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use storefront_core::seo::join_url;
use tracing::debug;

/// Sitemap stamped with the time of the request.
pub async fn sitemap(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let sitemap = build_sitemap(&state.config.app_base_url, Utc::now())?;
  debug!(entries = sitemap.entries().len(), "Sitemap generated.");
  Ok(
    HttpResponse::Ok()
      .content_type(ContentType::xml())
      .body(sitemap.to_xml()),
  )
}

pub async fn robots(state: web::Data<AppState>) -> HttpResponse {
  let body = format!(
    "User-agent: *\nAllow: /\nDisallow: /admin\n\nSitemap: {}\n",
    join_url(&state.config.app_base_url, "/sitemap.xml")
  );
  HttpResponse::Ok().content_type(ContentType::plaintext()).body(body)
}

pub async fn health_check() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

const STYLESHEET_CSS: &str = include_str!("../../../static/site.css");

pub async fn stylesheet() -> HttpResponse {
  HttpResponse::Ok()
    .content_type("text/css; charset=utf-8")
    .insert_header((actix_web::http::header::CACHE_CONTROL, "public, max-age=3600"))
    .body(STYLESHEET_CSS)
}
