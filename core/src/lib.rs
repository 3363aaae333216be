// storefront_core/src/lib.rs

//! Building blocks for server-rendered storefronts.
//!
//!  - Pages composed from section components between a shared header and
//!    footer, rendered into HTML with per-page SEO metadata.
//!  - Sitemap generation.
//!  - Async, stage-based workflows (validate, price, persist, notify...) with
//!    before/on/after handlers, optional stages, skip conditions and early
//!    halting, plus a registry that dispatches on the context type.

pub mod error;
pub mod flow;
pub mod page;
pub mod registry;
pub mod seo;
pub mod sitemap;
pub mod workflow;

pub use crate::error::{CoreError, CoreResult};
pub use crate::flow::{Flow, Handler, Outcome, Phase, Shared, SkipCondition};
pub use crate::page::{escape, section_fn, Markup, Page, Section};
pub use crate::registry::Registry;
pub use crate::seo::SeoMeta;
pub use crate::sitemap::{ChangeFreq, Sitemap, SitemapEntry};
pub use crate::workflow::Workflow;
