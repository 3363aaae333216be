// storefront-site/src/workflows/checkout_workflow.rs

use crate::errors::AppError;
use crate::models::{FieldErrors, Order, OrderStatus};
use crate::workflows::common_steps::{halt_on_errors, send_order_confirmation};
use crate::workflows::contexts::CheckoutCtx;
use chrono::Utc;
use std::collections::HashMap;
use storefront_core::{Flow, Registry, Shared, Workflow};
use tracing::{error, info, warn};
use uuid::Uuid;

pub fn build_checkout_workflow() -> Workflow<CheckoutCtx, AppError> {
  let mut wf = Workflow::<CheckoutCtx, AppError>::new(&[
    ("load_cart", false, None),
    ("validate_checkout_data", false, None),
    ("check_stock", false, None),
    ("price_order", false, None),
    ("place_order", false, None),
    ("clear_cart", false, None),
    ("send_order_confirmation", true, None),
  ]);

  wf.on("load_cart", |ctx: Shared<CheckoutCtx>| async move {
    let mut guard = ctx.write();
    // Taken out of the store so a second submit of the same cart finds nothing.
    let taken = guard.app_state.carts.take(guard.cart_id);
    let Some(cart) = taken.filter(|cart| !cart.is_empty()) else {
      let mut found = FieldErrors::default();
      found.add("cart", "Your cart is empty.");
      return Ok(halt_on_errors(&mut guard.errors, found));
    };
    info!(cart_id = %cart.id, lines = cart.items.len(), "Checkout: cart loaded.");
    guard.cart = Some(cart);
    Ok::<_, AppError>(Flow::Continue)
  });

  wf.on("validate_checkout_data", |ctx: Shared<CheckoutCtx>| async move {
    let mut guard = ctx.write();
    let mut found = std::mem::take(&mut guard.input_errors);
    found.merge(guard.data.validate());
    Ok::<_, AppError>(halt_on_errors(&mut guard.errors, found))
  });

  wf.on("check_stock", |ctx: Shared<CheckoutCtx>| async move {
    let mut guard = ctx.write();
    let cart = guard
      .cart
      .as_ref()
      .ok_or_else(|| AppError::Internal("Cart missing after load stage.".to_string()))?;

    let mut wanted: HashMap<Uuid, u32> = HashMap::new();
    for item in &cart.items {
      *wanted.entry(item.product.id).or_default() += item.quantity;
    }

    let mut found = FieldErrors::default();
    for (product_id, quantity) in wanted {
      match guard.app_state.catalog.get(product_id) {
        None => found.add("cart", "An item in your cart is no longer available."),
        Some(product) if product.stock < quantity => {
          warn!(product = %product.slug, stock = product.stock, quantity, "Checkout: not enough stock.");
          found.add(
            "cart",
            &format!("Only {} of {} left in stock. Please update your cart.", product.stock, product.name),
          );
        }
        Some(_) => {}
      }
    }
    Ok::<_, AppError>(halt_on_errors(&mut guard.errors, found))
  });

  wf.on("price_order", |ctx: Shared<CheckoutCtx>| async move {
    let mut guard = ctx.write();
    let rules = guard.app_state.pricing();
    let catalog = guard.app_state.catalog.clone();
    let cart = guard
      .cart
      .as_mut()
      .ok_or_else(|| AppError::Internal("Cart missing after load stage.".to_string()))?;

    // Orders are priced from the catalog as it is now, not as it was when added.
    for item in cart.items.iter_mut() {
      if let Some(current) = catalog.get(item.product.id) {
        item.product = current;
      }
    }
    cart.reprice(&rules);
    info!(
      subtotal = cart.subtotal_cents,
      shipping = cart.shipping_cents,
      tax = cart.tax_cents,
      total = cart.total_cents,
      "Checkout: order priced."
    );
    Ok::<_, AppError>(Flow::Continue)
  });

  wf.on("place_order", |ctx: Shared<CheckoutCtx>| async move {
    let mut guard = ctx.write();
    let cart = guard
      .cart
      .clone()
      .ok_or_else(|| AppError::Internal("Cart missing after load stage.".to_string()))?;
    let quantities: Vec<(Uuid, u32)> = cart.items.iter().map(|i| (i.product.id, i.quantity)).collect();

    if let Err(err) = guard.app_state.catalog.take_stock(&quantities) {
      return match err {
        AppError::Validation(message) | AppError::NotFound(message) => {
          let mut found = FieldErrors::default();
          found.add("cart", &message);
          Ok(halt_on_errors(&mut guard.errors, found))
        }
        other => Err(other),
      };
    }

    let order = Order {
      id: Uuid::new_v4(),
      number: String::new(),
      status: OrderStatus::for_payment(guard.data.payment_method),
      cart,
      checkout: guard.data.clone(),
      currency: guard.app_state.config.currency.clone(),
      placed_at: Utc::now(),
    };
    let order = guard.app_state.orders.insert(order);
    info!(order_id = %order.id, number = %order.number, status = order.status.label(), "Checkout: order placed.");
    guard.order = Some(order);
    Ok::<_, AppError>(Flow::Continue)
  });

  wf.on("clear_cart", |ctx: Shared<CheckoutCtx>| async move {
    let mut guard = ctx.write();
    // The cart left the store in `load_cart`; dropping it here keeps
    // `release_cart` from putting it back.
    if guard.cart.take().is_some() {
      info!(cart_id = %guard.cart_id, "Checkout: cart emptied.");
    }
    Ok::<_, AppError>(Flow::Continue)
  });

  wf.on("send_order_confirmation", |ctx: Shared<CheckoutCtx>| async move {
    let (app_state, order) = {
      let guard = ctx.read();
      (guard.app_state.clone(), guard.order.clone())
    };
    let Some(order) = order else {
      error!("Checkout: no order to confirm.");
      return Err(AppError::Internal("Order missing after place stage.".to_string()));
    };
    send_order_confirmation(&app_state, &order).await?;
    ctx.write().confirmation_sent = true;
    Ok::<_, AppError>(Flow::Continue)
  });

  wf
}

/// Returns the cart taken by `load_cart` to the store when no order was
/// placed, whether the run halted or failed.
pub fn release_cart(ctx: &Shared<CheckoutCtx>) {
  let mut guard = ctx.write();
  if guard.order.is_some() {
    return;
  }
  if let Some(cart) = guard.cart.take() {
    let rules = guard.app_state.pricing();
    info!(cart_id = %cart.id, lines = cart.items.len(), "Checkout: cart returned to the store.");
    guard.app_state.carts.restore(cart, &rules);
  }
}

pub fn register_checkout_workflow(registry: &Registry<AppError>) {
  registry.register(build_checkout_workflow());
  info!("Checkout workflow registered.");
}
