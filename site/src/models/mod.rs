// storefront-site/src/models/mod.rs

//! Domain data shapes and their validation rules.

pub mod application;
pub mod cart;
pub mod checkout;
pub mod order;
pub mod product;
pub mod review;
pub mod validation;

pub use application::{Application, ApplicationForm, ApplicationKind, ContactForm, ContactMessage};
pub use cart::{format_money, Cart, CartError, CartItem, CartTotals, PricingRules, SelectedOptions};
pub use checkout::{Address, CheckoutData, CheckoutForm, PaymentMethod};
pub use order::{Order, OrderStatus};
pub use product::{Product, ProductOption};
pub use review::{NewReview, Review};
pub use validation::{FieldError, FieldErrors};
