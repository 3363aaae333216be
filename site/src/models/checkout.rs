// storefront-site/src/models/checkout.rs

use super::validation::{is_email, parse_or_none, FieldErrors};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
  pub full_name: String,
  pub line1: String,
  #[serde(default)]
  pub line2: String,
  pub city: String,
  #[serde(default)]
  pub region: String,
  pub postal_code: String,
  pub country: String,
  pub email: String,
  #[serde(default)]
  pub phone: String,
}

impl Address {
  pub fn validate(&self, require_email: bool) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.require("full_name", &self.full_name, "Full name is required.");
    errors.require("line1", &self.line1, "Street address is required.");
    errors.require("city", &self.city, "City is required.");
    errors.require("postal_code", &self.postal_code, "Postal code is required.");
    errors.require("country", &self.country, "Country is required.");
    if require_email && !is_email(&self.email) {
      errors.add("email", "A valid email address is required.");
    }
    let phone_ok = self
      .phone
      .chars()
      .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
    if !phone_ok {
      errors.add("phone", "Phone numbers may only contain digits, spaces and + - ( ).");
    }
    errors
  }

  /// One-line rendering for summaries.
  pub fn one_line(&self) -> String {
    [
      self.line1.as_str(),
      self.line2.as_str(),
      self.city.as_str(),
      self.region.as_str(),
      self.postal_code.as_str(),
      self.country.as_str(),
    ]
    .iter()
    .map(|part| part.trim())
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
  #[default]
  Card,
  BankTransfer,
  CashOnDelivery,
}

impl PaymentMethod {
  pub const ALL: [PaymentMethod; 3] = [
    PaymentMethod::Card,
    PaymentMethod::BankTransfer,
    PaymentMethod::CashOnDelivery,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      PaymentMethod::Card => "card",
      PaymentMethod::BankTransfer => "bank_transfer",
      PaymentMethod::CashOnDelivery => "cash_on_delivery",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      PaymentMethod::Card => "Credit or debit card",
      PaymentMethod::BankTransfer => "Bank transfer",
      PaymentMethod::CashOnDelivery => "Cash on delivery",
    }
  }
}

impl FromStr for PaymentMethod {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    PaymentMethod::ALL
      .into_iter()
      .find(|method| method.as_str() == s)
      .ok_or_else(|| format!("unknown payment method '{}'", s))
  }
}

impl fmt::Display for PaymentMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Checkout form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutData {
  pub billing: Address,
  /// Ignored when `shipping_same_as_billing` is set.
  #[serde(default)]
  pub shipping: Option<Address>,
  #[serde(default)]
  pub shipping_same_as_billing: bool,
  pub payment_method: PaymentMethod,
  #[serde(default)]
  pub notes: String,
}

pub const MAX_NOTES_CHARS: usize = 1000;

impl CheckoutData {
  /// Address the order ships to.
  pub fn shipping_address(&self) -> &Address {
    match &self.shipping {
      Some(shipping) if !self.shipping_same_as_billing => shipping,
      _ => &self.billing,
    }
  }

  pub fn validate(&self) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.extend_prefixed("billing", self.billing.validate(true));
    if !self.shipping_same_as_billing {
      match &self.shipping {
        Some(shipping) => errors.extend_prefixed("shipping", shipping.validate(false)),
        None => errors.add("shipping", "Enter a shipping address or ship to the billing address."),
      }
    }
    if self.notes.chars().count() > MAX_NOTES_CHARS {
      errors.add("notes", "Order notes are limited to 1000 characters.");
    }
    errors
  }
}

/// The checkout form as posted: one flat field per input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
  pub billing_full_name: String,
  pub billing_line1: String,
  pub billing_line2: String,
  pub billing_city: String,
  pub billing_region: String,
  pub billing_postal_code: String,
  pub billing_country: String,
  pub billing_email: String,
  pub billing_phone: String,
  /// Checkbox: present (any value) when ticked.
  pub shipping_same_as_billing: Option<String>,
  pub shipping_full_name: String,
  pub shipping_line1: String,
  pub shipping_line2: String,
  pub shipping_city: String,
  pub shipping_region: String,
  pub shipping_postal_code: String,
  pub shipping_country: String,
  pub shipping_phone: String,
  /// `None` when nothing or an unknown method was posted.
  #[serde(deserialize_with = "parse_or_none")]
  pub payment_method: Option<PaymentMethod>,
  pub notes: String,
}

impl CheckoutForm {
  /// A blank form with "ship to billing address" ticked.
  pub fn blank() -> Self {
    Self {
      shipping_same_as_billing: Some("on".to_string()),
      payment_method: Some(PaymentMethod::default()),
      ..Self::default()
    }
  }

  pub fn ships_to_billing(&self) -> bool {
    self.shipping_same_as_billing.is_some()
  }

  /// Problems with the posted form itself, reported next to the checkout
  /// data's own validation.
  pub fn input_errors(&self) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if self.payment_method.is_none() {
      errors.add("payment_method", "Choose one of the listed payment methods.");
    }
    errors
  }

  /// Form fields trimmed into [`CheckoutData`]. A missing payment method is
  /// reported by [`CheckoutForm::input_errors`].
  pub fn to_data(&self) -> CheckoutData {
    let billing = Address {
      full_name: self.billing_full_name.trim().to_string(),
      line1: self.billing_line1.trim().to_string(),
      line2: self.billing_line2.trim().to_string(),
      city: self.billing_city.trim().to_string(),
      region: self.billing_region.trim().to_string(),
      postal_code: self.billing_postal_code.trim().to_string(),
      country: self.billing_country.trim().to_string(),
      email: self.billing_email.trim().to_string(),
      phone: self.billing_phone.trim().to_string(),
    };
    let shipping = (!self.ships_to_billing()).then(|| Address {
      full_name: self.shipping_full_name.trim().to_string(),
      line1: self.shipping_line1.trim().to_string(),
      line2: self.shipping_line2.trim().to_string(),
      city: self.shipping_city.trim().to_string(),
      region: self.shipping_region.trim().to_string(),
      postal_code: self.shipping_postal_code.trim().to_string(),
      country: self.shipping_country.trim().to_string(),
      email: String::new(),
      phone: self.shipping_phone.trim().to_string(),
    });
    CheckoutData {
      billing,
      shipping,
      shipping_same_as_billing: self.ships_to_billing(),
      payment_method: self.payment_method.unwrap_or_default(),
      notes: self.notes.trim().to_string(),
    }
  }
}
