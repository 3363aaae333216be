// storefront_core/src/page/section.rs

//! Section components: one visual region of a page.

use super::Markup;
use std::fmt;
use std::sync::Arc;

/// Renders one region of a page from the page's view data `V`.
///
/// Sections are built once at startup and shared across requests, so they
/// hold configuration (copy, links, image paths) and read everything
/// request-specific from `V`.
pub trait Section<V>: Send + Sync {
  fn name(&self) -> &str;

  fn render(&self, view: &V, out: &mut Markup) -> anyhow::Result<()>;
}

/// Predicate deciding whether an optional section is left out.
pub type SectionSkip<V> = Arc<dyn Fn(&V) -> bool + Send + Sync + 'static>;

/// A [`Section`] backed by a closure.
pub struct FnSection<F> {
  name: String,
  render_fn: F,
}

impl<V, F> Section<V> for FnSection<F>
where
  F: Fn(&V, &mut Markup) -> anyhow::Result<()> + Send + Sync,
{
  fn name(&self) -> &str {
    &self.name
  }

  fn render(&self, view: &V, out: &mut Markup) -> anyhow::Result<()> {
    (self.render_fn)(view, out)
  }
}

/// Wraps a closure as a section.
pub fn section_fn<V, F>(name: impl Into<String>, render_fn: F) -> FnSection<F>
where
  F: Fn(&V, &mut Markup) -> anyhow::Result<()> + Send + Sync,
{
  FnSection {
    name: name.into(),
    render_fn,
  }
}

/// A section placed on a page, with its switches.
pub struct SectionSlot<V> {
  pub(crate) section: Box<dyn Section<V>>,
  pub(crate) enabled: bool,
  pub(crate) skip_if: Option<SectionSkip<V>>,
}

impl<V> SectionSlot<V> {
  pub fn name(&self) -> &str {
    self.section.name()
  }

  pub fn is_enabled(&self) -> bool {
    self.enabled
  }

  pub(crate) fn renders_for(&self, view: &V) -> bool {
    self.enabled && !self.skip_if.as_ref().is_some_and(|skip| skip(view))
  }
}

impl<V> fmt::Debug for SectionSlot<V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SectionSlot")
      .field("name", &self.name())
      .field("enabled", &self.enabled)
      .field("skip_if_present", &self.skip_if.is_some())
      .finish()
  }
}
