// storefront_core/src/page/mod.rs

//! Page composition: markup, section components and page layouts.

pub mod layout;
pub mod markup;
pub mod section;

pub use layout::Page;
pub use markup::{escape, Markup};
pub use section::{section_fn, FnSection, Section, SectionSkip, SectionSlot};
