// storefront-site/src/state.rs
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::PricingRules;
use crate::pages::SitePages;
use crate::services::{CartStore, Catalog, Mailer, OrderStore, SubmissionStore};
use std::sync::Arc;
use storefront_core::Registry;

#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  pub workflows: Arc<Registry<AppError>>,
  pub pages: Arc<SitePages>,
  pub catalog: Arc<Catalog>,
  pub carts: Arc<CartStore>,
  pub orders: Arc<OrderStore>,
  pub submissions: Arc<SubmissionStore>,
  pub mailer: Arc<Mailer>,
}

impl AppState {
  /// Builds the state and registers every workflow.
  pub fn build(config: AppConfig, catalog: Catalog) -> Self {
    let config = Arc::new(config);
    let state = Self {
      pages: Arc::new(SitePages::build(&config)),
      workflows: Arc::new(Registry::new()),
      catalog: Arc::new(catalog),
      carts: Arc::new(CartStore::new()),
      orders: Arc::new(OrderStore::new()),
      submissions: Arc::new(SubmissionStore::new()),
      mailer: Arc::new(Mailer::new(config.mail_sender.clone())),
      config,
    };
    crate::workflows::register_all_workflows(&state.workflows);
    state
  }

  pub fn pricing(&self) -> PricingRules {
    PricingRules {
      shipping_flat_cents: self.config.shipping_flat_cents,
      tax_rate_bps: self.config.tax_rate_bps,
    }
  }

  pub fn money(&self, cents: i64) -> String {
    crate::models::format_money(cents, &self.config.currency)
  }
}
