// storefront-site/src/main.rs

use actix_web::{web, App, HttpServer};
use storefront_site::services::Catalog;
use storefront_site::web::configure_app_routes;
use storefront_site::web::handlers::not_found;
use storefront_site::{AppConfig, AppState};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // RUST_LOG overrides the default level.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting storefront server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };

  let catalog = match Catalog::load(app_config.catalog_path.as_deref()) {
    Ok(catalog) => catalog,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load the product catalog.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
    }
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  let app_state = AppState::build(app_config, catalog);
  tracing::info!(address = %server_address, base_url = %app_state.config.app_base_url, "Binding server.");

  HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
      .default_service(web::to(not_found))
  })
  .bind(&server_address)?
  .run()
  .await
}
