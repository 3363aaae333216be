// storefront-site/src/workflows/cart_workflow.rs

use crate::errors::AppError;
use crate::models::{FieldErrors, Product, SelectedOptions};
use crate::workflows::common_steps::halt_on_errors;
use crate::workflows::contexts::AddToCartCtx;
use storefront_core::{Flow, Registry, Shared, Workflow};
use tracing::{info, warn};

pub fn build_add_to_cart_workflow() -> Workflow<AddToCartCtx, AppError> {
  let mut wf = Workflow::<AddToCartCtx, AppError>::new(&[
    ("validate_cart_input", false, None),
    ("fetch_product_for_cart", false, None),
    ("validate_options", false, None),
    ("check_stock_for_cart", false, None),
    ("merge_into_cart", false, None),
  ]);

  wf.on("validate_cart_input", |ctx: Shared<AddToCartCtx>| async move {
    let mut guard = ctx.write();
    let mut found = FieldErrors::default();
    if guard.quantity == 0 {
      found.add("quantity", "Quantity must be at least 1.");
    }
    Ok::<_, AppError>(halt_on_errors(&mut guard.errors, found))
  });

  wf.on("fetch_product_for_cart", |ctx: Shared<AddToCartCtx>| async move {
    let (product_id, catalog) = {
      let guard = ctx.read();
      (guard.product_id, guard.app_state.catalog.clone())
    };
    let product = catalog
      .get(product_id)
      .ok_or_else(|| AppError::NotFound(format!("Product {} not found.", product_id)))?;
    info!(product = %product.slug, "Add to cart: product found.");
    ctx.write().product = Some(product);
    Ok::<_, AppError>(Flow::Continue)
  });

  wf.on("validate_options", |ctx: Shared<AddToCartCtx>| async move {
    let mut guard = ctx.write();
    let found = match &guard.product {
      Some(product) => option_errors(product, &guard.options),
      None => return Err(AppError::Internal("Product missing after fetch stage.".to_string())),
    };
    Ok::<_, AppError>(halt_on_errors(&mut guard.errors, found))
  });

  wf.on("check_stock_for_cart", |ctx: Shared<AddToCartCtx>| async move {
    let (product, quantity, cart) = {
      let guard = ctx.read();
      let product = guard
        .product
        .clone()
        .ok_or_else(|| AppError::Internal("Product missing after fetch stage.".to_string()))?;
      (product, guard.quantity, guard.app_state.carts.snapshot(guard.cart_id))
    };

    let in_cart: u32 = cart
      .items
      .iter()
      .filter(|i| i.product.id == product.id)
      .map(|i| i.quantity)
      .sum();

    let mut found = FieldErrors::default();
    if !product.in_stock() {
      found.add("quantity", &format!("{} is out of stock.", product.name));
    } else if in_cart.saturating_add(quantity) > product.stock {
      warn!(product = %product.slug, in_cart, requested = quantity, stock = product.stock, "Add to cart: not enough stock.");
      found.add(
        "quantity",
        &format!(
          "Only {} of {} left in stock ({} already in your cart).",
          product.stock, product.name, in_cart
        ),
      );
    }
    let mut guard = ctx.write();
    Ok::<_, AppError>(halt_on_errors(&mut guard.errors, found))
  });

  wf.on("merge_into_cart", |ctx: Shared<AddToCartCtx>| async move {
    let mut guard = ctx.write();
    let product = guard
      .product
      .clone()
      .ok_or_else(|| AppError::Internal("Product missing after fetch stage.".to_string()))?;
    let rules = guard.app_state.pricing();
    let (cart_id, quantity, options) = (guard.cart_id, guard.quantity, guard.options.clone());

    // Stock is checked again under the cart lock; a concurrent add may have won.
    let result = guard
      .app_state
      .carts
      .update(cart_id, |cart| cart.add(&product, quantity, options, &rules));
    match result {
      Ok(line_id) => {
        info!(%cart_id, %line_id, product = %product.slug, quantity, "Add to cart: cart updated.");
        guard.line_id = Some(line_id);
        Ok::<_, AppError>(Flow::Continue)
      }
      Err(err) => {
        let mut found = FieldErrors::default();
        found.add("quantity", &err.to_string());
        Ok(halt_on_errors(&mut guard.errors, found))
      }
    }
  });

  wf
}

/// Every product option needs one of its listed values; nothing else may be selected.
fn option_errors(product: &Product, selected: &SelectedOptions) -> FieldErrors {
  let mut errors = FieldErrors::default();
  for option in &product.options {
    match selected.get(&option.name) {
      None => errors.add(
        &format!("options.{}", option.name),
        &format!("Please choose a {}.", option.name.to_lowercase()),
      ),
      Some(value) if !option.values.contains(value) => errors.add(
        &format!("options.{}", option.name),
        &format!("'{}' is not an available {}.", value, option.name.to_lowercase()),
      ),
      Some(_) => {}
    }
  }
  for name in selected.keys() {
    if product.option(name).is_none() {
      errors.add(
        &format!("options.{}", name),
        &format!("{} has no '{}' option.", product.name, name),
      );
    }
  }
  errors
}

pub fn register_add_to_cart_workflow(registry: &Registry<AppError>) {
  registry.register(build_add_to_cart_workflow());
  info!("Add to cart workflow registered.");
}
