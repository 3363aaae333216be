// storefront-site/src/workflows/common_steps.rs

//! Steps shared by several workflows.

use crate::errors::Result as AppResult;
use crate::models::{FieldErrors, Order};
use crate::services::Mailer;
use crate::state::AppState;
use storefront_core::{escape, Flow};
use tracing::{info, instrument, warn};

/// Moves `found` into `errors` and halts when anything was found.
pub fn halt_on_errors(errors: &mut FieldErrors, found: FieldErrors) -> Flow {
  if found.is_empty() {
    return Flow::Continue;
  }
  warn!(count = found.len(), summary = %found.summary(), "Submission rejected.");
  errors.merge(found);
  Flow::Halt
}

#[instrument(name = "common_step::send_notification", skip(mailer, html_body), err(Display))]
pub async fn send_notification(mailer: &Mailer, to: &str, subject: &str, html_body: &str) -> AppResult<()> {
  let sent = mailer.send(to, subject, html_body).await?;
  info!(message_id = %sent.message_id, "Notification delivered.");
  Ok(())
}

#[instrument(name = "common_step::send_order_confirmation", skip(app_state, order), fields(order = %order.number), err(Display))]
pub async fn send_order_confirmation(app_state: &AppState, order: &Order) -> AppResult<()> {
  let billing = &order.checkout.billing;
  let mut body = format!(
    "<p>Hi {},</p><p>Thanks for shopping with {}. Your order {} is confirmed.</p><ul>",
    escape(&billing.full_name),
    escape(&app_state.config.site_name),
    escape(&order.number),
  );
  for item in &order.cart.items {
    body.push_str(&format!(
      "<li>{} &times; {}: {}</li>",
      item.quantity,
      escape(&item.product.name),
      app_state.money(item.line_total_cents())
    ));
  }
  body.push_str(&format!(
    "</ul><p>Total: {}</p><p>Payment: {} ({})</p><p>Shipping to: {}</p>",
    app_state.money(order.total_cents()),
    order.checkout.payment_method.label(),
    order.status.label(),
    escape(&order.checkout.shipping_address().one_line()),
  ));

  let subject = format!("Your {} order {} is confirmed", app_state.config.site_name, order.number);
  send_notification(&app_state.mailer, &billing.email, &subject, &body).await
}
