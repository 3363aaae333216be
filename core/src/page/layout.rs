// storefront_core/src/page/layout.rs

//! `Page<V>`: a route's ordered sections between one header and one footer.

use super::section::{Section, SectionSkip, SectionSlot};
use super::Markup;
use crate::error::{CoreError, CoreResult};
use crate::seo::SeoMeta;
use tracing::{event, instrument, Level};

pub struct Page<V> {
  path: String,
  meta: SeoMeta,
  header: Box<dyn Section<V>>,
  footer: Box<dyn Section<V>>,
  sections: Vec<SectionSlot<V>>,
  stylesheets: Vec<String>,
}

impl<V> Page<V> {
  pub fn new<H, F>(path: impl Into<String>, meta: SeoMeta, header: H, footer: F) -> Self
  where
    H: Section<V> + 'static,
    F: Section<V> + 'static,
  {
    Self {
      path: path.into(),
      meta,
      header: Box::new(header),
      footer: Box::new(footer),
      sections: Vec::new(),
      stylesheets: Vec::new(),
    }
  }

  /// Appends a section. Sections render in the order they were added.
  pub fn section<S: Section<V> + 'static>(mut self, section: S) -> Self {
    self.sections.push(SectionSlot {
      section: Box::new(section),
      enabled: true,
      skip_if: None,
    });
    self
  }

  /// Appends a section that is left out whenever `skip_if(view)` holds.
  pub fn optional_section<S, P>(mut self, section: S, skip_if: P) -> Self
  where
    S: Section<V> + 'static,
    P: Fn(&V) -> bool + Send + Sync + 'static,
  {
    let skip: SectionSkip<V> = std::sync::Arc::new(skip_if);
    self.sections.push(SectionSlot {
      section: Box::new(section),
      enabled: true,
      skip_if: Some(skip),
    });
    self
  }

  /// Switches a section off without removing it from the layout.
  /// Panics on unknown names, which are layout typos.
  pub fn disable(mut self, name: &str) -> Self {
    match self.sections.iter_mut().find(|slot| slot.name() == name) {
      Some(slot) => slot.enabled = false,
      None => panic!("page setup error: no section '{}' on page '{}'", name, self.path),
    }
    self
  }

  pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
    self.stylesheets.push(href.into());
    self
  }

  pub fn path(&self) -> &str {
    &self.path
  }

  pub fn meta(&self) -> &SeoMeta {
    &self.meta
  }

  /// Names of all sections in layout order, disabled ones included.
  pub fn section_names(&self) -> Vec<&str> {
    self.sections.iter().map(|slot| slot.name()).collect()
  }

  /// Names of the sections that would render for `view`.
  pub fn active_sections(&self, view: &V) -> Vec<&str> {
    self
      .sections
      .iter()
      .filter(|slot| slot.renders_for(view))
      .map(|slot| slot.name())
      .collect()
  }

  /// Renders the full HTML document with the page's own metadata.
  pub fn render(&self, view: &V) -> CoreResult<Markup> {
    self.render_with_meta(view, &self.meta)
  }

  /// Renders the document with `meta` in place of the page's own metadata,
  /// for routes whose title depends on the request (e.g. a product page).
  #[instrument(name = "Page::render", skip_all, fields(page = %self.path))]
  pub fn render_with_meta(&self, view: &V, meta: &SeoMeta) -> CoreResult<Markup> {
    let mut out = Markup::new();
    out.raw("<!DOCTYPE html>").open("html", &[("lang", "en")]);

    out.open("head", &[]);
    out.void("meta", &[("charset", "utf-8")]);
    out.void("meta", &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")]);
    meta.render_head(&mut out);
    for href in &self.stylesheets {
      out.void("link", &[("rel", "stylesheet"), ("href", href)]);
    }
    out.close("head");

    out.open("body", &[]);
    self.render_section(self.header.as_ref(), view, &mut out)?;
    out.open("main", &[]);
    for slot in &self.sections {
      if slot.renders_for(view) {
        self.render_section(slot.section.as_ref(), view, &mut out)?;
      } else {
        event!(Level::TRACE, section = slot.name(), "Section left out.");
      }
    }
    out.close("main");
    self.render_section(self.footer.as_ref(), view, &mut out)?;
    out.close("body").close("html");

    event!(Level::DEBUG, bytes = out.len(), "Page rendered.");
    Ok(out)
  }

  fn render_section(&self, section: &dyn Section<V>, view: &V, out: &mut Markup) -> CoreResult<()> {
    section.render(view, out).map_err(|source| {
      event!(Level::ERROR, section = section.name(), error = %source, "Section failed.");
      CoreError::SectionFailed {
        page: self.path.clone(),
        section: section.name().to_string(),
        source,
      }
    })
  }
}
