// storefront_core/src/seo.rs

//! Page metadata for search engines and link previews.

use crate::page::Markup;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeoMeta {
  pub title: String,
  pub description: String,
  pub keywords: Vec<String>,
  /// Absolute canonical URL, when known.
  pub canonical: Option<String>,
}

impl SeoMeta {
  /// Metadata for one page of a site.
  ///
  /// The document title is `"{title} | {site_name}"`, or just the site name
  /// when `title` is empty. Keywords are trimmed, empty ones dropped and
  /// duplicates (case-insensitive) removed, keeping first occurrences.
  pub fn page(site_name: &str, title: &str, description: &str, keywords: &[&str]) -> Self {
    let title = if title.trim().is_empty() {
      site_name.to_string()
    } else {
      format!("{} | {}", title.trim(), site_name)
    };

    let mut unique: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords.iter().map(|k| k.trim()).filter(|k| !k.is_empty()) {
      if !unique.iter().any(|seen| seen.eq_ignore_ascii_case(keyword)) {
        unique.push(keyword.to_string());
      }
    }

    Self {
      title,
      description: description.trim().to_string(),
      keywords: unique,
      canonical: None,
    }
  }

  /// Sets the canonical URL to `base_url` joined with `path`.
  pub fn with_canonical(mut self, base_url: &str, path: &str) -> Self {
    self.canonical = Some(join_url(base_url, path));
    self
  }

  /// Writes the `<title>` and `<meta>`/`<link>` tags into a `<head>`.
  pub fn render_head(&self, out: &mut Markup) {
    out.element("title", &[], &self.title);
    if !self.description.is_empty() {
      out.void("meta", &[("name", "description"), ("content", &self.description)]);
    }
    if !self.keywords.is_empty() {
      out.void("meta", &[("name", "keywords"), ("content", &self.keywords.join(", "))]);
    }
    if let Some(canonical) = &self.canonical {
      out.void("link", &[("rel", "canonical"), ("href", canonical)]);
      out.void("meta", &[("property", "og:url"), ("content", canonical)]);
    }
    out.void("meta", &[("property", "og:title"), ("content", &self.title)]);
    if !self.description.is_empty() {
      out.void("meta", &[("property", "og:description"), ("content", &self.description)]);
    }
  }
}

/// Joins a base URL and a path with exactly one slash between them.
pub fn join_url(base_url: &str, path: &str) -> String {
  let base = base_url.trim_end_matches('/');
  let path = path.trim_start_matches('/');
  if path.is_empty() {
    format!("{}/", base)
  } else {
    format!("{}/{}", base, path)
  }
}
