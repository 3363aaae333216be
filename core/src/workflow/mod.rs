// storefront_core/src/workflow/mod.rs

//! Stage-based workflows: construction, handler registration and execution.

pub mod definition;
pub mod execution;
pub mod hooks;

pub use definition::Workflow;
