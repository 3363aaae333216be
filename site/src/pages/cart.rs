// storefront-site/src/pages/cart.rs

//! Cart, checkout and order confirmation sections.

use super::views::{CartView, CheckoutView, OrderView};
use super::widgets::{self, InputKind};
use crate::models::{format_money, Cart, CheckoutForm, FieldErrors, PaymentMethod, SelectedOptions};
use storefront_core::{Markup, Section};

pub struct CartTable {
  currency: String,
}

impl CartTable {
  pub fn new(currency: impl Into<String>) -> Self {
    Self {
      currency: currency.into(),
    }
  }
}

impl Section<CartView> for CartTable {
  fn name(&self) -> &str {
    "cart_table"
  }

  fn render(&self, view: &CartView, out: &mut Markup) -> anyhow::Result<()> {
    out.open("section", &[("class", "cart")]);
    out.element("h1", &[], "Your cart");
    widgets::error_summary(out, &view.errors);
    if view.cart.is_empty() {
      out.element("p", &[("class", "empty")], "Your cart is empty.");
      out.element("a", &[("class", "button"), ("href", "/shop")], "Continue shopping");
      out.close("section");
      return Ok(());
    }

    out.open("table", &[("class", "cart-table")]);
    out.raw("<thead><tr><th>Product</th><th>Price</th><th>Quantity</th><th>Total</th><th></th></tr></thead>");
    out.open("tbody", &[]);
    for item in &view.cart.items {
      let line_id = item.line_id.to_string();
      let quantity = item.quantity.to_string();
      let max = item.product.stock.to_string();
      let href = format!("/shop/{}", item.product.slug);
      out.open("tr", &[]);
      out.wrap("td", &[], |out| {
        out.element("a", &[("href", &href)], &item.product.name);
        if !item.selected_options.is_empty() {
          out.element("p", &[("class", "options")], &describe_options(&item.selected_options));
        }
      });
      out.element("td", &[], &format_money(item.product.price_cents, &self.currency));
      out.wrap("td", &[], |out| {
        out.wrap("form", &[("method", "post"), ("action", "/cart/update")], |out| {
          widgets::hidden(out, "line_id", &line_id);
          out.void(
            "input",
            &[
              ("type", "number"),
              ("name", "quantity"),
              ("value", &quantity),
              ("min", "0"),
              ("max", &max),
              ("aria-label", "Quantity"),
            ],
          );
          widgets::submit(out, "Update");
        });
      });
      out.element("td", &[], &format_money(item.line_total_cents(), &self.currency));
      out.wrap("td", &[], |out| {
        out.wrap("form", &[("method", "post"), ("action", "/cart/remove")], |out| {
          widgets::hidden(out, "line_id", &line_id);
          widgets::submit(out, "Remove");
        });
      });
      out.close("tr");
    }
    out.close("tbody").close("table");
    out.close("section");
    Ok(())
  }
}

pub struct TotalsBox {
  currency: String,
}

impl TotalsBox {
  pub fn new(currency: impl Into<String>) -> Self {
    Self {
      currency: currency.into(),
    }
  }

  fn render_totals(&self, cart: &Cart, out: &mut Markup) {
    out.open("dl", &[("class", "totals")]);
    let rows = [
      ("Subtotal", cart.subtotal_cents),
      ("Shipping", cart.shipping_cents),
      ("Tax", cart.tax_cents),
      ("Total", cart.total_cents),
    ];
    for (label, cents) in rows {
      out.element("dt", &[], label);
      out.element("dd", &[], &format_money(cents, &self.currency));
    }
    out.close("dl");
  }
}

impl Section<CartView> for TotalsBox {
  fn name(&self) -> &str {
    "totals"
  }

  fn render(&self, view: &CartView, out: &mut Markup) -> anyhow::Result<()> {
    if view.cart.is_empty() {
      return Ok(());
    }
    out.open("aside", &[("class", "totals-box")]);
    self.render_totals(&view.cart, out);
    out.element("a", &[("class", "button"), ("href", "/checkout")], "Proceed to checkout");
    out.close("aside");
    Ok(())
  }
}

impl Section<CheckoutView> for TotalsBox {
  fn name(&self) -> &str {
    "totals"
  }

  fn render(&self, view: &CheckoutView, out: &mut Markup) -> anyhow::Result<()> {
    out.open("aside", &[("class", "totals-box")]);
    out.element("h2", &[], "Order summary");
    out.open("ul", &[("class", "summary-lines")]);
    for item in &view.cart.items {
      let line = format!(
        "{} × {}: {}",
        item.quantity,
        item.product.name,
        format_money(item.line_total_cents(), &self.currency)
      );
      out.element("li", &[], &line);
    }
    out.close("ul");
    self.render_totals(&view.cart, out);
    out.close("aside");
    Ok(())
  }
}

pub struct CheckoutFormSection;

impl Section<CheckoutView> for CheckoutFormSection {
  fn name(&self) -> &str {
    "checkout_form"
  }

  fn render(&self, view: &CheckoutView, out: &mut Markup) -> anyhow::Result<()> {
    let form = &view.form;
    let errors = &view.errors;
    out.open("section", &[("class", "checkout")]);
    out.element("h1", &[], "Checkout");
    widgets::error_summary(out, errors);
    if view.cart.is_empty() {
      out.element("p", &[("class", "empty")], "Your cart is empty.");
      out.element("a", &[("class", "button"), ("href", "/shop")], "Continue shopping");
      out.close("section");
      return Ok(());
    }

    out.open("form", &[("method", "post"), ("action", "/checkout")]);
    out.open("fieldset", &[]).element("legend", &[], "Billing address");
    address_fields(out, "billing", &billing_values(form), errors, true);
    out.close("fieldset");

    widgets::checkbox(
      out,
      "shipping_same_as_billing",
      "Ship to my billing address",
      form.ships_to_billing(),
      errors.message_for("shipping"),
    );
    out.open("fieldset", &[("class", "shipping-address")]).element("legend", &[], "Shipping address");
    address_fields(out, "shipping", &shipping_values(form), errors, false);
    out.close("fieldset");

    let methods: Vec<(&str, &str)> = PaymentMethod::ALL.iter().map(|m| (m.as_str(), m.label())).collect();
    let selected = form.payment_method.map_or("", PaymentMethod::as_str);
    widgets::radio_group(out, "payment_method", "Payment method", &methods, selected);
    widgets::text_area(out, "notes", "Order notes", &form.notes, 3, false, errors.message_for("notes"));
    widgets::submit(out, "Place order");
    out.close("form");
    out.close("section");
    Ok(())
  }
}

/// Values of one address block, in the order of [`ADDRESS_FIELDS`].
struct AddressValues<'a>([&'a str; 9]);

/// `(field, label, input kind)`; the email field only exists for billing.
const ADDRESS_FIELDS: [(&str, &str, InputKind); 9] = [
  ("full_name", "Full name", InputKind::Text),
  ("line1", "Street address", InputKind::Text),
  ("line2", "Apartment, suite, etc.", InputKind::Text),
  ("city", "City", InputKind::Text),
  ("region", "State / region", InputKind::Text),
  ("postal_code", "Postal code", InputKind::Text),
  ("country", "Country", InputKind::Text),
  ("email", "Email", InputKind::Email),
  ("phone", "Phone", InputKind::Tel),
];

fn billing_values(form: &CheckoutForm) -> AddressValues<'_> {
  AddressValues([
    &form.billing_full_name,
    &form.billing_line1,
    &form.billing_line2,
    &form.billing_city,
    &form.billing_region,
    &form.billing_postal_code,
    &form.billing_country,
    &form.billing_email,
    &form.billing_phone,
  ])
}

fn shipping_values(form: &CheckoutForm) -> AddressValues<'_> {
  AddressValues([
    &form.shipping_full_name,
    &form.shipping_line1,
    &form.shipping_line2,
    &form.shipping_city,
    &form.shipping_region,
    &form.shipping_postal_code,
    &form.shipping_country,
    "",
    &form.shipping_phone,
  ])
}

fn address_fields(out: &mut Markup, prefix: &str, values: &AddressValues<'_>, errors: &FieldErrors, billing: bool) {
  for ((field, label, kind), value) in ADDRESS_FIELDS.iter().zip(values.0) {
    if *field == "email" && !billing {
      continue;
    }
    let name = format!("{}_{}", prefix, field);
    let error_key = format!("{}.{}", prefix, field);
    let required = matches!(*field, "full_name" | "line1" | "city" | "postal_code" | "country" | "email");
    // Shipping inputs are only required once the box above is unticked.
    let required = required && billing;
    widgets::text_field(out, &name, label, value, *kind, required, errors.message_for(&error_key));
  }
}

pub struct OrderSummary {
  currency: String,
}

impl OrderSummary {
  pub fn new(currency: impl Into<String>) -> Self {
    Self {
      currency: currency.into(),
    }
  }
}

impl Section<OrderView> for OrderSummary {
  fn name(&self) -> &str {
    "order_summary"
  }

  fn render(&self, view: &OrderView, out: &mut Markup) -> anyhow::Result<()> {
    let order = &view.order;
    let currency = if order.currency.is_empty() { &self.currency } else { &order.currency };
    out.open("section", &[("class", "order-summary")]);
    out.element("h1", &[], &format!("Thank you! Order {} is confirmed.", order.number));
    out.element("p", &[("class", "status")], &format!("Status: {}", order.status.label()));
    out.open("ul", &[("class", "summary-lines")]);
    for item in &order.cart.items {
      let mut line = format!("{} × {}", item.quantity, item.product.name);
      if !item.selected_options.is_empty() {
        line.push_str(&format!(" ({})", describe_options(&item.selected_options)));
      }
      line.push_str(&format!(": {}", format_money(item.line_total_cents(), currency)));
      out.element("li", &[], &line);
    }
    out.close("ul");
    out.open("dl", &[("class", "totals")]);
    for (label, cents) in [
      ("Subtotal", order.cart.subtotal_cents),
      ("Shipping", order.cart.shipping_cents),
      ("Tax", order.cart.tax_cents),
      ("Total", order.cart.total_cents),
    ] {
      out.element("dt", &[], label);
      out.element("dd", &[], &format_money(cents, currency));
    }
    out.close("dl");
    out.element("p", &[], &format!("Payment: {}", order.checkout.payment_method.label()));
    out.element("p", &[], &format!("Shipping to: {}", order.checkout.shipping_address().one_line()));
    if order.status == crate::models::OrderStatus::AwaitingPayment {
      out.element(
        "p",
        &[("class", "notice")],
        "We have emailed payment instructions to your billing address.",
      );
    }
    out.close("section");
    Ok(())
  }
}

/// `{"Colour": "Navy", "Size": "M"}` -> `"Colour: Navy, Size: M"`
fn describe_options(options: &SelectedOptions) -> String {
  options
    .iter()
    .map(|(name, value)| format!("{}: {}", name, value))
    .collect::<Vec<_>>()
    .join(", ")
}
