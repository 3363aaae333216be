// storefront-site/src/services/cart_store.rs

//! Visitor carts keyed by the `cart_id` cookie.

use crate::models::{Cart, PricingRules};
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Default)]
pub struct CartStore {
  carts: RwLock<HashMap<Uuid, Cart>>,
}

impl CartStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Copy of the cart, or an empty cart when the id is unknown.
  pub fn snapshot(&self, cart_id: Uuid) -> Cart {
    self
      .carts
      .read()
      .get(&cart_id)
      .cloned()
      .unwrap_or_else(|| Cart::new(cart_id))
  }

  /// Applies `f` to the cart (created empty if missing) under the write lock.
  pub fn update<R, E>(&self, cart_id: Uuid, f: impl FnOnce(&mut Cart) -> Result<R, E>) -> Result<R, E> {
    let mut guard = self.carts.write();
    let cart = guard.entry(cart_id).or_insert_with(|| Cart::new(cart_id));
    f(cart)
  }

  /// Applies `f` to a stored cart; `None` when there is no cart under the id.
  pub fn update_existing<R, E>(
    &self,
    cart_id: Uuid,
    f: impl FnOnce(&mut Cart) -> Result<R, E>,
  ) -> Option<Result<R, E>> {
    self.carts.write().get_mut(&cart_id).map(f)
  }

  /// Removes the cart and hands it to the caller. A second `take` of the same
  /// id gets `None` until the cart is restored or a new one is started.
  pub fn take(&self, cart_id: Uuid) -> Option<Cart> {
    self.carts.write().remove(&cart_id)
  }

  /// Puts a taken cart back. Lines added under the same id in the meantime
  /// are kept.
  pub fn restore(&self, cart: Cart, rules: &PricingRules) {
    let mut guard = self.carts.write();
    match guard.remove(&cart.id) {
      Some(newer) => {
        let mut cart = cart;
        cart.absorb(newer, rules);
        guard.insert(cart.id, cart);
      }
      None => {
        guard.insert(cart.id, cart);
      }
    }
  }

  pub fn len(&self) -> usize {
    self.carts.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.carts.read().is_empty()
  }
}
