// storefront_core/src/sitemap.rs

//! Sitemap entries and their XML form (sitemaps.org protocol 0.9).

use crate::error::{CoreError, CoreResult};
use crate::page::escape;
use crate::seo::join_url;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
  Always,
  Hourly,
  Daily,
  Weekly,
  Monthly,
  Yearly,
  Never,
}

impl ChangeFreq {
  pub fn as_str(self) -> &'static str {
    match self {
      ChangeFreq::Always => "always",
      ChangeFreq::Hourly => "hourly",
      ChangeFreq::Daily => "daily",
      ChangeFreq::Weekly => "weekly",
      ChangeFreq::Monthly => "monthly",
      ChangeFreq::Yearly => "yearly",
      ChangeFreq::Never => "never",
    }
  }
}

impl fmt::Display for ChangeFreq {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
  pub path: String,
  pub last_modified: DateTime<Utc>,
  pub change_freq: ChangeFreq,
  pub priority: f32,
}

impl SitemapEntry {
  /// Fails with [`CoreError::InvalidPriority`] unless `0.0 <= priority <= 1.0`.
  pub fn new(
    path: impl Into<String>,
    last_modified: DateTime<Utc>,
    change_freq: ChangeFreq,
    priority: f32,
  ) -> CoreResult<Self> {
    let path = path.into();
    if !(0.0..=1.0).contains(&priority) {
      return Err(CoreError::InvalidPriority { path, priority });
    }
    Ok(Self {
      path,
      last_modified,
      change_freq,
      priority,
    })
  }

  /// `lastmod` value: RFC 3339 in UTC with second precision.
  pub fn lastmod(&self) -> String {
    self.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
  }
}

#[derive(Debug, Clone)]
pub struct Sitemap {
  base_url: String,
  entries: Vec<SitemapEntry>,
}

impl Sitemap {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      entries: Vec::new(),
    }
  }

  pub fn add(&mut self, entry: SitemapEntry) -> &mut Self {
    self.entries.push(entry);
    self
  }

  pub fn entries(&self) -> &[SitemapEntry] {
    &self.entries
  }

  pub fn to_xml(&self) -> String {
    let mut xml = String::with_capacity(128 + self.entries.len() * 160);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NAMESPACE));
    for entry in &self.entries {
      xml.push_str("  <url>\n");
      xml.push_str(&format!("    <loc>{}</loc>\n", escape(&join_url(&self.base_url, &entry.path))));
      xml.push_str(&format!("    <lastmod>{}</lastmod>\n", entry.lastmod()));
      xml.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.change_freq));
      xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
      xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
  }
}
