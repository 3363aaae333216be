// storefront-site/src/models/cart.rs

use super::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

/// Option name -> chosen value. Ordered so equal selections compare equal.
pub type SelectedOptions = BTreeMap<String, String>;

/// Inputs for cart totals. Both default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
  pub shipping_flat_cents: i64,
  pub tax_rate_bps: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CartTotals {
  pub subtotal_cents: i64,
  pub shipping_cents: i64,
  pub tax_cents: i64,
  pub total_cents: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
  #[error("Quantity must be at least 1.")]
  InvalidQuantity,

  #[error("Only {available} of {product} in stock.")]
  InsufficientStock { product: String, available: u32 },

  #[error("{product} is out of stock.")]
  OutOfStock { product: String },

  #[error("That item is no longer in your cart.")]
  LineNotFound,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
  pub line_id: Uuid,
  /// Product as it was when added; price shown in the cart comes from here.
  pub product: Product,
  pub quantity: u32,
  #[serde(default)]
  pub selected_options: SelectedOptions,
}

impl CartItem {
  pub fn line_total_cents(&self) -> i64 {
    self.product.price_cents * i64::from(self.quantity)
  }

  fn same_line(&self, product_id: Uuid, options: &SelectedOptions) -> bool {
    self.product.id == product_id && &self.selected_options == options
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
  pub id: Uuid,
  pub items: Vec<CartItem>,
  pub subtotal_cents: i64,
  pub shipping_cents: i64,
  pub tax_cents: i64,
  pub total_cents: i64,
  pub updated_at: DateTime<Utc>,
}

impl Cart {
  pub fn new(id: Uuid) -> Self {
    Self {
      id,
      items: Vec::new(),
      subtotal_cents: 0,
      shipping_cents: 0,
      tax_cents: 0,
      total_cents: 0,
      updated_at: Utc::now(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Total number of units across all lines.
  pub fn item_count(&self) -> u32 {
    self.items.iter().map(|i| i.quantity).sum()
  }

  pub fn line(&self, line_id: Uuid) -> Option<&CartItem> {
    self.items.iter().find(|i| i.line_id == line_id)
  }

  /// Adds `quantity` of `product`. A line with the same product and the same
  /// selected options absorbs the quantity; anything else starts a new line.
  /// Returns the id of the affected line.
  pub fn add(
    &mut self,
    product: &Product,
    quantity: u32,
    options: SelectedOptions,
    rules: &PricingRules,
  ) -> Result<Uuid, CartError> {
    if quantity == 0 {
      return Err(CartError::InvalidQuantity);
    }
    if !product.in_stock() {
      return Err(CartError::OutOfStock {
        product: product.name.clone(),
      });
    }

    // Stock bounds the product's units across every line, whatever the options.
    let already_in_cart: u32 = self
      .items
      .iter()
      .filter(|i| i.product.id == product.id)
      .map(|i| i.quantity)
      .sum();
    if already_in_cart.saturating_add(quantity) > product.stock {
      return Err(CartError::InsufficientStock {
        product: product.name.clone(),
        available: product.stock.saturating_sub(already_in_cart),
      });
    }

    let line_id = match self.items.iter_mut().find(|i| i.same_line(product.id, &options)) {
      Some(line) => {
        line.quantity += quantity;
        line.product = product.clone();
        line.line_id
      }
      None => {
        let line_id = Uuid::new_v4();
        self.items.push(CartItem {
          line_id,
          product: product.clone(),
          quantity,
          selected_options: options,
        });
        line_id
      }
    };
    self.reprice(rules);
    Ok(line_id)
  }

  /// Sets a line's quantity; zero removes the line. `stock` is the product's
  /// current stock.
  pub fn set_quantity(&mut self, line_id: Uuid, quantity: u32, stock: u32, rules: &PricingRules) -> Result<(), CartError> {
    if quantity == 0 {
      return self.remove(line_id, rules);
    }
    let product_id = self.line(line_id).ok_or(CartError::LineNotFound)?.product.id;
    let other_lines: u32 = self
      .items
      .iter()
      .filter(|i| i.product.id == product_id && i.line_id != line_id)
      .map(|i| i.quantity)
      .sum();
    let line = self
      .items
      .iter_mut()
      .find(|i| i.line_id == line_id)
      .ok_or(CartError::LineNotFound)?;
    if other_lines.saturating_add(quantity) > stock {
      return Err(CartError::InsufficientStock {
        product: line.product.name.clone(),
        available: stock.saturating_sub(other_lines),
      });
    }
    line.quantity = quantity;
    self.reprice(rules);
    Ok(())
  }

  pub fn remove(&mut self, line_id: Uuid, rules: &PricingRules) -> Result<(), CartError> {
    let before = self.items.len();
    self.items.retain(|i| i.line_id != line_id);
    if self.items.len() == before {
      return Err(CartError::LineNotFound);
    }
    self.reprice(rules);
    Ok(())
  }

  /// Moves the lines of `newer` into this cart. Matching lines add up their
  /// quantities; the rest are appended.
  pub fn absorb(&mut self, newer: Cart, rules: &PricingRules) {
    for item in newer.items {
      match self
        .items
        .iter_mut()
        .find(|i| i.same_line(item.product.id, &item.selected_options))
      {
        Some(line) => {
          line.quantity += item.quantity;
          line.product = item.product;
        }
        None => self.items.push(item),
      }
    }
    self.reprice(rules);
  }

  pub fn clear(&mut self, rules: &PricingRules) {
    self.items.clear();
    self.reprice(rules);
  }

  /// Subtotal, shipping, tax and total of the current lines under `rules`.
  pub fn totals(&self, rules: &PricingRules) -> CartTotals {
    let subtotal_cents: i64 = self.items.iter().map(CartItem::line_total_cents).sum();
    let shipping_cents = if self.items.is_empty() {
      0
    } else {
      rules.shipping_flat_cents
    };
    let tax_cents = tax_cents(subtotal_cents, rules.tax_rate_bps);
    CartTotals {
      subtotal_cents,
      shipping_cents,
      tax_cents,
      total_cents: subtotal_cents + shipping_cents + tax_cents,
    }
  }

  /// Stores [`Cart::totals`] on the cart.
  pub fn reprice(&mut self, rules: &PricingRules) {
    let totals = self.totals(rules);
    self.subtotal_cents = totals.subtotal_cents;
    self.shipping_cents = totals.shipping_cents;
    self.tax_cents = totals.tax_cents;
    self.total_cents = totals.total_cents;
    self.updated_at = Utc::now();
  }
}

/// `subtotal × rate` with the rate in basis points, rounded half up.
pub fn tax_cents(subtotal_cents: i64, tax_rate_bps: u32) -> i64 {
  if subtotal_cents <= 0 || tax_rate_bps == 0 {
    return 0;
  }
  (subtotal_cents * i64::from(tax_rate_bps) + 5_000) / 10_000
}

/// `1234, "USD"` -> `"$12.34"`; unknown currencies get the code as prefix.
pub fn format_money(cents: i64, currency: &str) -> String {
  let sign = if cents < 0 { "-" } else { "" };
  let abs = cents.unsigned_abs();
  let amount = format!("{}.{:02}", abs / 100, abs % 100);
  match currency {
    "USD" => format!("{}${}", sign, amount),
    "EUR" => format!("{}€{}", sign, amount),
    "GBP" => format!("{}£{}", sign, amount),
    other => format!("{}{} {}", sign, other, amount),
  }
}
