// storefront-site/src/pages/admin.rs

use super::views::DashboardView;
use crate::models::format_money;
use storefront_core::{Markup, Section};

pub struct DashboardStatsSection {
  currency: String,
}

impl DashboardStatsSection {
  pub fn new(currency: impl Into<String>) -> Self {
    Self {
      currency: currency.into(),
    }
  }
}

impl Section<DashboardView> for DashboardStatsSection {
  fn name(&self) -> &str {
    "dashboard_stats"
  }

  fn render(&self, view: &DashboardView, out: &mut Markup) -> anyhow::Result<()> {
    let stats = &view.stats;
    out.open("section", &[("class", "dashboard")]);
    out.element("h1", &[], "Dashboard");
    out.open("dl", &[("class", "stats")]);
    let mut rows: Vec<(String, String)> = vec![
      ("Orders".to_string(), stats.order_count.to_string()),
      ("Revenue".to_string(), format_money(stats.revenue_cents, &self.currency)),
      ("Open carts".to_string(), stats.open_carts.to_string()),
      ("Products".to_string(), stats.product_count.to_string()),
      ("Sold out".to_string(), stats.out_of_stock.to_string()),
      ("Contact messages".to_string(), stats.message_count.to_string()),
    ];
    for (kind, count) in &stats.applications {
      rows.push((format!("{} applications", kind.label()), count.to_string()));
    }
    for (label, value) in &rows {
      out.element("dt", &[], label);
      out.element("dd", &[], value);
    }
    out.close("dl");
    out.close("section");
    Ok(())
  }
}
