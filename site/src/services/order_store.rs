// storefront-site/src/services/order_store.rs

use crate::models::Order;
use parking_lot::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct OrderStore {
  orders: RwLock<Vec<Order>>,
}

impl OrderStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Stores the order, assigning its number under the same lock so numbers
  /// stay unique when checkouts race.
  pub fn insert(&self, mut order: Order) -> Order {
    let mut guard = self.orders.write();
    order.number = format!("SF-{:06}", guard.len() + 1);
    guard.push(order.clone());
    order
  }

  pub fn get(&self, id: Uuid) -> Option<Order> {
    self.orders.read().iter().find(|o| o.id == id).cloned()
  }

  pub fn count(&self) -> usize {
    self.orders.read().len()
  }

  /// Sum of all order totals, in cents.
  pub fn revenue_cents(&self) -> i64 {
    self.orders.read().iter().map(Order::total_cents).sum()
  }

  /// Whether `email` appears as the billing email of an order containing `product_id`.
  pub fn has_purchased(&self, email: &str, product_id: Uuid) -> bool {
    let email = email.trim();
    self
      .orders
      .read()
      .iter()
      .any(|o| o.checkout.billing.email.trim().eq_ignore_ascii_case(email) && o.contains_product(product_id))
  }
}
