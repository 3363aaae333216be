// storefront-site/src/services/catalog.rs

//! In-process product catalog and product reviews.

use crate::errors::{AppError, Result as AppResult};
use crate::models::review::average_rating;
use crate::models::{Product, Review};
use parking_lot::RwLock;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::{info, instrument, warn};
use uuid::Uuid;

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Deserialize)]
struct CatalogFile {
  products: Vec<Product>,
}

#[derive(Default)]
struct CatalogInner {
  /// Catalog order, as listed in the source file.
  products: Vec<Product>,
  reviews: HashMap<Uuid, Vec<Review>>,
}

pub struct Catalog {
  inner: RwLock<CatalogInner>,
}

impl Catalog {
  pub fn from_products(products: Vec<Product>) -> AppResult<Self> {
    let mut seen_ids = BTreeSet::new();
    let mut seen_slugs = BTreeSet::new();
    for product in &products {
      if !seen_ids.insert(product.id) || !seen_slugs.insert(product.slug.clone()) {
        return Err(AppError::Config(format!(
          "Catalog lists product '{}' ({}) more than once.",
          product.slug, product.id
        )));
      }
      if product.price_cents < 0 {
        return Err(AppError::Config(format!("Product '{}' has a negative price.", product.slug)));
      }
    }
    Ok(Self {
      inner: RwLock::new(CatalogInner {
        products,
        reviews: HashMap::new(),
      }),
    })
  }

  pub fn from_json(json: &str) -> AppResult<Self> {
    let file: CatalogFile = serde_json::from_str(json)?;
    Self::from_products(file.products)
  }

  /// The catalog shipped with the binary.
  pub fn embedded() -> AppResult<Self> {
    Self::from_json(EMBEDDED_CATALOG)
  }

  /// Loads `path` when given, the embedded catalog otherwise.
  pub fn load(path: Option<&str>) -> AppResult<Self> {
    let catalog = match path {
      Some(path) => {
        let json = std::fs::read_to_string(Path::new(path))?;
        Self::from_json(&json)?
      }
      None => Self::embedded()?,
    };
    info!(products = catalog.len(), source = path.unwrap_or("embedded"), "Catalog loaded.");
    Ok(catalog)
  }

  pub fn len(&self) -> usize {
    self.inner.read().products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.read().products.is_empty()
  }

  /// Products in catalog order, optionally restricted to one category.
  pub fn list(&self, category: Option<&str>) -> Vec<Product> {
    let guard = self.inner.read();
    guard
      .products
      .iter()
      .filter(|p| category.map_or(true, |c| p.category.eq_ignore_ascii_case(c)))
      .cloned()
      .collect()
  }

  /// Distinct categories in order of first appearance.
  pub fn categories(&self) -> Vec<String> {
    let guard = self.inner.read();
    let mut categories: Vec<String> = Vec::new();
    for product in &guard.products {
      if !categories.contains(&product.category) {
        categories.push(product.category.clone());
      }
    }
    categories
  }

  pub fn get(&self, id: Uuid) -> Option<Product> {
    self.inner.read().products.iter().find(|p| p.id == id).cloned()
  }

  pub fn get_by_slug(&self, slug: &str) -> Option<Product> {
    self.inner.read().products.iter().find(|p| p.slug == slug).cloned()
  }

  /// Takes `quantities` (product id, units) out of stock, all or nothing.
  #[instrument(name = "catalog::take_stock", skip(self, quantities), fields(lines = quantities.len()))]
  pub fn take_stock(&self, quantities: &[(Uuid, u32)]) -> AppResult<()> {
    let mut guard = self.inner.write();

    let mut needed: HashMap<Uuid, u32> = HashMap::new();
    for (id, qty) in quantities {
      *needed.entry(*id).or_default() += qty;
    }
    for (id, qty) in &needed {
      let product = guard
        .products
        .iter()
        .find(|p| p.id == *id)
        .ok_or_else(|| AppError::NotFound(format!("Product {} is no longer available.", id)))?;
      if product.stock < *qty {
        warn!(product = %product.slug, available = product.stock, requested = qty, "Not enough stock.");
        return Err(AppError::Validation(format!(
          "Only {} of {} left in stock.",
          product.stock, product.name
        )));
      }
    }
    for product in guard.products.iter_mut() {
      if let Some(qty) = needed.get(&product.id) {
        product.stock -= qty;
      }
    }
    Ok(())
  }

  /// Reviews for a product, most helpful first, then newest.
  pub fn reviews_for(&self, product_id: Uuid) -> Vec<Review> {
    let guard = self.inner.read();
    let mut reviews = guard.reviews.get(&product_id).cloned().unwrap_or_default();
    reviews.sort_by(|a, b| {
      b.helpful_count
        .cmp(&a.helpful_count)
        .then_with(|| b.created_at.cmp(&a.created_at))
    });
    reviews
  }

  /// Stores a review and refreshes the product's rating and review count.
  pub fn add_review(&self, review: Review) -> AppResult<()> {
    let mut guard = self.inner.write();
    let inner = &mut *guard;
    let product = inner
      .products
      .iter_mut()
      .find(|p| p.id == review.product_id)
      .ok_or_else(|| AppError::NotFound(format!("Product {} not found.", review.product_id)))?;
    let reviews = inner.reviews.entry(review.product_id).or_default();
    reviews.push(review);
    product.rating = average_rating(reviews);
    product.review_count = reviews.len() as u32;
    Ok(())
  }

  /// Increments a review's helpful count and returns the review.
  pub fn mark_helpful(&self, review_id: Uuid) -> AppResult<Review> {
    let mut guard = self.inner.write();
    guard
      .reviews
      .values_mut()
      .flat_map(|reviews| reviews.iter_mut())
      .find(|r| r.id == review_id)
      .map(|review| {
        review.helpful_count += 1;
        review.clone()
      })
      .ok_or_else(|| AppError::NotFound(format!("Review {} not found.", review_id)))
  }
}
