// storefront-site/src/pages/widgets.rs

//! Form primitives shared by every form on the site.

use crate::models::FieldErrors;
use storefront_core::Markup;

/// Input type of a [`text_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
  Text,
  Email,
  Url,
  Tel,
  Number,
}

impl InputKind {
  fn as_str(self) -> &'static str {
    match self {
      InputKind::Text => "text",
      InputKind::Email => "email",
      InputKind::Url => "url",
      InputKind::Tel => "tel",
      InputKind::Number => "number",
    }
  }
}

/// Labelled `<input>` with its error message, if any, underneath.
pub fn text_field(
  out: &mut Markup,
  name: &str,
  label: &str,
  value: &str,
  kind: InputKind,
  required: bool,
  error: Option<&str>,
) {
  let class = field_class(error);
  out.open("div", &[("class", class.as_str())]);
  label_for(out, name, label, required);
  let mut attrs: Vec<(&str, &str)> = vec![
    ("type", kind.as_str()),
    ("id", name),
    ("name", name),
    ("value", value),
  ];
  if required {
    attrs.push(("required", "required"));
  }
  if error.is_some() {
    attrs.push(("aria-invalid", "true"));
  }
  out.void("input", &attrs);
  field_error(out, error);
  out.close("div");
}

pub fn text_area(out: &mut Markup, name: &str, label: &str, value: &str, rows: u8, required: bool, error: Option<&str>) {
  let class = field_class(error);
  let rows = rows.to_string();
  out.open("div", &[("class", class.as_str())]);
  label_for(out, name, label, required);
  let mut attrs: Vec<(&str, &str)> = vec![("id", name), ("name", name), ("rows", rows.as_str())];
  if required {
    attrs.push(("required", "required"));
  }
  out.element("textarea", &attrs, value);
  field_error(out, error);
  out.close("div");
}

/// Checkbox posted as `name=on` when ticked and absent otherwise.
pub fn checkbox(out: &mut Markup, name: &str, label: &str, checked: bool, error: Option<&str>) {
  let class = format!("{} checkbox", field_class(error));
  out.open("div", &[("class", class.as_str())]);
  out.open("label", &[("for", name)]);
  let mut attrs: Vec<(&str, &str)> = vec![("type", "checkbox"), ("id", name), ("name", name), ("value", "on")];
  if checked {
    attrs.push(("checked", "checked"));
  }
  out.void("input", &attrs);
  out.text(" ").text(label);
  out.close("label");
  field_error(out, error);
  out.close("div");
}

/// `<select>` over `(value, label)` pairs.
pub fn select(
  out: &mut Markup,
  name: &str,
  label: &str,
  options: &[(&str, &str)],
  selected: Option<&str>,
  error: Option<&str>,
) {
  let class = field_class(error);
  out.open("div", &[("class", class.as_str())]);
  label_for(out, name, label, true);
  out.open("select", &[("id", name), ("name", name)]);
  for &(value, text) in options {
    if selected == Some(value) {
      out.element("option", &[("value", value), ("selected", "selected")], text);
    } else {
      out.element("option", &[("value", value)], text);
    }
  }
  out.close("select");
  field_error(out, error);
  out.close("div");
}

/// Radio group over `(value, label)` pairs.
pub fn radio_group(out: &mut Markup, name: &str, legend: &str, options: &[(&str, &str)], selected: &str) {
  out.open("fieldset", &[("class", "radio-group")]);
  out.element("legend", &[], legend);
  for &(value, text) in options {
    let id = format!("{}_{}", name, value);
    out.open("label", &[("for", id.as_str())]);
    let mut attrs: Vec<(&str, &str)> = vec![("type", "radio"), ("id", id.as_str()), ("name", name), ("value", value)];
    if value == selected {
      attrs.push(("checked", "checked"));
    }
    out.void("input", &attrs);
    out.text(" ").text(text);
    out.close("label");
  }
  out.close("fieldset");
}

pub fn hidden(out: &mut Markup, name: &str, value: &str) {
  out.void("input", &[("type", "hidden"), ("name", name), ("value", value)]);
}

pub fn submit(out: &mut Markup, label: &str) {
  out.element("button", &[("type", "submit"), ("class", "button")], label);
}

/// Box listing every message, shown above a rejected form.
pub fn error_summary(out: &mut Markup, errors: &FieldErrors) {
  if errors.is_empty() {
    return;
  }
  out.wrap("div", &[("class", "form-errors"), ("role", "alert")], |out| {
    out.element("p", &[], "Please correct the following:");
    out.wrap("ul", &[], |out| {
      for err in errors.iter() {
        out.element("li", &[], &err.message);
      }
    });
  });
}

/// Filled and empty stars for a rating out of five.
pub fn stars(rating: f32) -> String {
  let filled = rating.round().clamp(0.0, 5.0) as usize;
  format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn field_class(error: Option<&str>) -> String {
  if error.is_some() {
    "field has-error".to_string()
  } else {
    "field".to_string()
  }
}

fn label_for(out: &mut Markup, name: &str, label: &str, required: bool) {
  out.open("label", &[("for", name)]).text(label);
  if required {
    out.element("span", &[("class", "required")], " *");
  }
  out.close("label");
}

fn field_error(out: &mut Markup, error: Option<&str>) {
  if let Some(message) = error {
    out.element("p", &[("class", "field-error")], message);
  }
}
