// storefront-site/src/models/product.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A selectable product option such as size or colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
  pub name: String,
  pub values: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
  pub id: Uuid,
  pub slug: String,
  pub name: String,
  #[serde(default)]
  pub description: String,
  pub category: String,
  pub price_cents: i64,
  #[serde(default)]
  pub images: Vec<String>,
  pub stock: u32,
  /// Mean review rating, one decimal. Recomputed when reviews are added.
  #[serde(default)]
  pub rating: f32,
  #[serde(default)]
  pub review_count: u32,
  #[serde(default)]
  pub options: Vec<ProductOption>,
}

impl Product {
  pub fn in_stock(&self) -> bool {
    self.stock > 0
  }

  pub fn primary_image(&self) -> Option<&str> {
    self.images.first().map(String::as_str)
  }

  pub fn option(&self, name: &str) -> Option<&ProductOption> {
    self.options.iter().find(|o| o.name == name)
  }
}
