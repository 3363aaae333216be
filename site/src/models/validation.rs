// storefront-site/src/models/validation.rs

//! Field-level validation messages for form submissions.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field: String,
  pub message: String,
}

/// Messages collected while validating a form, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
  pub fn add(&mut self, field: &str, message: &str) {
    self.0.push(FieldError {
      field: field.to_string(),
      message: message.to_string(),
    });
  }

  /// Adds `message` when `value` is blank.
  pub fn require(&mut self, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
      self.add(field, message);
    }
  }

  /// Merges `other`, prefixing its field names (e.g. `billing.city`).
  pub fn extend_prefixed(&mut self, prefix: &str, other: FieldErrors) {
    for err in other.0 {
      self.0.push(FieldError {
        field: format!("{}.{}", prefix, err.field),
        message: err.message,
      });
    }
  }

  pub fn merge(&mut self, other: FieldErrors) {
    self.0.extend(other.0);
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn has(&self, field: &str) -> bool {
    self.0.iter().any(|e| e.field == field)
  }

  /// First message for `field`, used next to the input.
  pub fn message_for(&self, field: &str) -> Option<&str> {
    self.0.iter().find(|e| e.field == field).map(|e| e.message.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
    self.0.iter()
  }

  pub fn summary(&self) -> String {
    self.0.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join(" ")
  }
}

/// Loose structural email check: one `@`, non-empty local part, dotted domain.
pub fn is_email(value: &str) -> bool {
  let value = value.trim();
  let Some((local, domain)) = value.split_once('@') else {
    return false;
  };
  !local.is_empty()
    && !domain.contains('@')
    && !value.chars().any(char::is_whitespace)
    && domain.split('.').count() >= 2
    && domain.split('.').all(|part| !part.is_empty())
}

/// Accepts empty input or an http(s) URL with a host.
pub fn is_optional_url(value: &str) -> bool {
  let value = value.trim();
  if value.is_empty() {
    return true;
  }
  let rest = value
    .strip_prefix("https://")
    .or_else(|| value.strip_prefix("http://"));
  matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/') && host.contains('.'))
}

/// Form field parsed with `FromStr`; unparseable input becomes `None` so the
/// form can be re-rendered with a field message instead of failing to decode.
pub fn parse_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: FromStr,
{
  let raw = String::deserialize(deserializer)?;
  Ok(raw.trim().parse::<T>().ok())
}

/// Like [`parse_or_none`], falling back to `T::default()`.
pub fn parse_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: FromStr + Default,
{
  Ok(parse_or_none(deserializer)?.unwrap_or_default())
}
