// storefront-site/src/pages/sections.rs

//! Content sections with fixed copy. They render the same for every view.

use storefront_core::{Markup, Section};

pub struct Hero {
  pub heading: String,
  pub tagline: String,
  pub action: Option<(String, String)>,
}

impl Hero {
  pub fn new(heading: impl Into<String>, tagline: impl Into<String>) -> Self {
    Self {
      heading: heading.into(),
      tagline: tagline.into(),
      action: None,
    }
  }

  pub fn action(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
    self.action = Some((label.into(), href.into()));
    self
  }
}

impl<V> Section<V> for Hero {
  fn name(&self) -> &str {
    "hero"
  }

  fn render(&self, _view: &V, out: &mut Markup) -> anyhow::Result<()> {
    out.open("section", &[("class", "hero")]);
    out.element("h1", &[], &self.heading);
    out.element("p", &[("class", "tagline")], &self.tagline);
    if let Some((label, href)) = &self.action {
      out.element("a", &[("class", "button"), ("href", href)], label);
    }
    out.close("section");
    Ok(())
  }
}

/// A heading followed by paragraphs.
pub struct InfoBlock {
  name: String,
  heading: String,
  paragraphs: Vec<String>,
}

impl InfoBlock {
  pub fn new(name: impl Into<String>, heading: impl Into<String>, paragraphs: &[&str]) -> Self {
    Self {
      name: name.into(),
      heading: heading.into(),
      paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
    }
  }
}

impl<V> Section<V> for InfoBlock {
  fn name(&self) -> &str {
    &self.name
  }

  fn render(&self, _view: &V, out: &mut Markup) -> anyhow::Result<()> {
    let class = format!("info-block {}", self.name);
    out.open("section", &[("class", class.as_str())]);
    out.element("h2", &[], &self.heading);
    for paragraph in &self.paragraphs {
      out.element("p", &[], paragraph);
    }
    out.close("section");
    Ok(())
  }
}

/// A grid of `(title, text)` cards.
pub struct FeatureList {
  name: String,
  heading: String,
  items: Vec<(String, String)>,
}

impl FeatureList {
  pub fn new(name: impl Into<String>, heading: impl Into<String>, items: &[(&str, &str)]) -> Self {
    Self {
      name: name.into(),
      heading: heading.into(),
      items: items.iter().map(|(t, d)| (t.to_string(), d.to_string())).collect(),
    }
  }
}

impl<V> Section<V> for FeatureList {
  fn name(&self) -> &str {
    &self.name
  }

  fn render(&self, _view: &V, out: &mut Markup) -> anyhow::Result<()> {
    out.open("section", &[("class", "feature-list")]);
    out.element("h2", &[], &self.heading);
    out.open("ul", &[("class", "cards")]);
    for (title, text) in &self.items {
      out.wrap("li", &[("class", "card")], |out| {
        out.element("h3", &[], title);
        out.element("p", &[], text);
      });
    }
    out.close("ul").close("section");
    Ok(())
  }
}

pub struct CallToAction {
  name: String,
  heading: String,
  text: String,
  label: String,
  href: String,
}

impl CallToAction {
  pub fn new(name: &str, heading: &str, text: &str, label: &str, href: &str) -> Self {
    Self {
      name: name.to_string(),
      heading: heading.to_string(),
      text: text.to_string(),
      label: label.to_string(),
      href: href.to_string(),
    }
  }
}

impl<V> Section<V> for CallToAction {
  fn name(&self) -> &str {
    &self.name
  }

  fn render(&self, _view: &V, out: &mut Markup) -> anyhow::Result<()> {
    out.open("section", &[("class", "call-to-action")]);
    out.element("h2", &[], &self.heading);
    out.element("p", &[], &self.text);
    out.element("a", &[("class", "button"), ("href", &self.href)], &self.label);
    out.close("section");
    Ok(())
  }
}

/// Customer quotes. Placed on the marketing pages but switched off until
/// there are real quotes to show.
pub struct Testimonials {
  quotes: Vec<(String, String)>,
}

impl Testimonials {
  pub fn new(quotes: &[(&str, &str)]) -> Self {
    Self {
      quotes: quotes.iter().map(|(q, a)| (q.to_string(), a.to_string())).collect(),
    }
  }
}

impl<V> Section<V> for Testimonials {
  fn name(&self) -> &str {
    "testimonials"
  }

  fn render(&self, _view: &V, out: &mut Markup) -> anyhow::Result<()> {
    out.open("section", &[("class", "testimonials")]);
    out.element("h2", &[], "What our customers say");
    for (quote, author) in &self.quotes {
      out.wrap("blockquote", &[], |out| {
        out.element("p", &[], quote);
        out.element("cite", &[], author);
      });
    }
    out.close("section");
    Ok(())
  }
}
