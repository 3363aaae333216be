// storefront-site/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub app_base_url: String,
  pub site_name: String,

  // Mock mail
  pub mail_sender: String,
  pub notify_inbox: String,

  // Pricing inputs for cart totals
  pub currency: String,
  pub shipping_flat_cents: i64,
  pub tax_rate_bps: u32,

  /// JSON catalog on disk; the embedded catalog is used when unset.
  pub catalog_path: Option<String>,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = parse_var("SERVER_PORT", get_env("SERVER_PORT"), 8080u16)?;
    let app_base_url = get_env("APP_BASE_URL").unwrap_or_else(|| format!("http://{}:{}", server_host, server_port));

    let config = Self {
      site_name: get_env("SITE_NAME").unwrap_or_else(|| "Storefront".to_string()),
      mail_sender: get_env("MAIL_SENDER").unwrap_or_else(|| "noreply@example.com".to_string()),
      notify_inbox: get_env("NOTIFY_INBOX").unwrap_or_else(|| "team@example.com".to_string()),
      currency: get_env("CURRENCY").unwrap_or_else(|| "USD".to_string()).to_uppercase(),
      shipping_flat_cents: parse_var("SHIPPING_FLAT_CENTS", get_env("SHIPPING_FLAT_CENTS"), 0i64)?,
      tax_rate_bps: parse_var("TAX_RATE_BPS", get_env("TAX_RATE_BPS"), 0u32)?,
      catalog_path: get_env("CATALOG_PATH"),
      server_host,
      server_port,
      app_base_url,
    };
    config.validate()?;

    tracing::info!(
      site = %config.site_name,
      base_url = %config.app_base_url,
      currency = %config.currency,
      "Application configuration loaded successfully."
    );
    Ok(config)
  }

  /// Defaults without reading the environment; used by tests and local tooling.
  pub fn local() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      app_base_url: "http://127.0.0.1:8080".to_string(),
      site_name: "Storefront".to_string(),
      mail_sender: "noreply@example.com".to_string(),
      notify_inbox: "team@example.com".to_string(),
      currency: "USD".to_string(),
      shipping_flat_cents: 0,
      tax_rate_bps: 0,
      catalog_path: None,
    }
  }

  fn validate(&self) -> Result<()> {
    if self.shipping_flat_cents < 0 {
      return Err(AppError::Config("SHIPPING_FLAT_CENTS must not be negative".to_string()));
    }
    if self.tax_rate_bps > 10_000 {
      return Err(AppError::Config("TAX_RATE_BPS must be at most 10000 (100%)".to_string()));
    }
    if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
      return Err(AppError::Config(format!(
        "CURRENCY must be a three-letter code, got '{}'",
        self.currency
      )));
    }
    Ok(())
  }
}

fn parse_var<T>(name: &str, raw: Option<String>, default: T) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match raw {
    None => Ok(default),
    Some(value) => value
      .trim()
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {}: {}", name, e))),
  }
}
