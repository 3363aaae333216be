// storefront_core/src/page/markup.rs

//! A minimal HTML string builder.

use std::fmt;

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for ch in input.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      other => out.push(other),
    }
  }
  out
}

/// Accumulates HTML. Text passed to [`Markup::text`] and attribute values are
/// escaped; [`Markup::raw`] is written as is.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Markup {
  buf: String,
}

impl Markup {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn raw(&mut self, html: &str) -> &mut Self {
    self.buf.push_str(html);
    self
  }

  pub fn text(&mut self, text: &str) -> &mut Self {
    self.buf.push_str(&escape(text));
    self
  }

  /// Writes `<tag attr="value" ...>`.
  pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
    self.buf.push('<');
    self.buf.push_str(tag);
    for (name, value) in attrs {
      self.buf.push(' ');
      self.buf.push_str(name);
      self.buf.push_str("=\"");
      self.buf.push_str(&escape(value));
      self.buf.push('"');
    }
    self.buf.push('>');
    self
  }

  pub fn close(&mut self, tag: &str) -> &mut Self {
    self.buf.push_str("</");
    self.buf.push_str(tag);
    self.buf.push('>');
    self
  }

  /// Writes a void element such as `<img>` or `<input>`.
  pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
    self.open(tag, attrs)
  }

  /// `<tag attrs>escaped text</tag>`
  pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
    self.open(tag, attrs).text(text).close(tag)
  }

  /// `<tag attrs>` + whatever `body` writes + `</tag>`
  pub fn wrap<F>(&mut self, tag: &str, attrs: &[(&str, &str)], body: F) -> &mut Self
  where
    F: FnOnce(&mut Markup),
  {
    self.open(tag, attrs);
    body(self);
    self.close(tag)
  }

  pub fn append(&mut self, other: Markup) -> &mut Self {
    self.buf.push_str(&other.buf);
    self
  }

  pub fn as_str(&self) -> &str {
    &self.buf
  }

  pub fn len(&self) -> usize {
    self.buf.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buf.is_empty()
  }

  pub fn into_string(self) -> String {
    self.buf
  }
}

impl fmt::Display for Markup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.buf)
  }
}

impl From<Markup> for String {
  fn from(markup: Markup) -> Self {
    markup.buf
  }
}
