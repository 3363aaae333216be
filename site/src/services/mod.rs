// storefront-site/src/services/mod.rs

//! In-process stores and the mock mailer.

pub mod cart_store;
pub mod catalog;
pub mod mailer;
pub mod order_store;
pub mod submission_store;

pub use cart_store::CartStore;
pub use catalog::Catalog;
pub use mailer::{Mailer, SentEmail};
pub use order_store::OrderStore;
pub use submission_store::SubmissionStore;
