// storefront-site/src/lib.rs

//! The storefront website: marketing pages, shop, cart, checkout, partner
//! applications and contact forms, served with actix-web.

pub mod config;
pub mod errors;
pub mod models;
pub mod pages;
pub mod services;
pub mod state;
pub mod web;
pub mod workflows;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
