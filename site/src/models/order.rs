// storefront-site/src/models/order.rs

use super::cart::Cart;
use super::checkout::{CheckoutData, PaymentMethod};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
  /// Pay-on-delivery orders are complete once placed.
  Placed,
  /// Card and bank transfer orders wait for payment collected outside the site.
  AwaitingPayment,
}

impl OrderStatus {
  pub fn for_payment(method: PaymentMethod) -> Self {
    match method {
      PaymentMethod::CashOnDelivery => OrderStatus::Placed,
      PaymentMethod::Card | PaymentMethod::BankTransfer => OrderStatus::AwaitingPayment,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      OrderStatus::Placed => "Placed",
      OrderStatus::AwaitingPayment => "Awaiting payment",
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct Order {
  pub id: Uuid,
  /// Human-facing sequential number, e.g. `SF-000042`.
  pub number: String,
  pub status: OrderStatus,
  /// The cart as priced at checkout.
  pub cart: Cart,
  pub checkout: CheckoutData,
  pub currency: String,
  pub placed_at: DateTime<Utc>,
}

impl Order {
  pub fn total_cents(&self) -> i64 {
    self.cart.total_cents
  }

  pub fn contains_product(&self, product_id: Uuid) -> bool {
    self.cart.items.iter().any(|i| i.product.id == product_id)
  }
}
