// storefront-site/src/pages/views.rs

//! Per-request data handed to page sections.

use crate::models::{
  ApplicationForm, ApplicationKind, Cart, CheckoutForm, ContactForm, FieldErrors, NewReview, Order, Product,
  Review,
};

/// What the header and footer need on every page.
#[derive(Debug, Clone, Default)]
pub struct Chrome {
  pub current_path: String,
  pub cart_count: u32,
  /// One-off notice shown under the header, e.g. after a form was sent.
  pub notice: Option<String>,
}

impl Chrome {
  pub fn new(current_path: impl Into<String>, cart_count: u32) -> Self {
    Self {
      current_path: current_path.into(),
      cart_count,
      notice: None,
    }
  }

  pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
    self.notice = Some(notice.into());
    self
  }
}

/// Views that carry [`Chrome`].
pub trait HasChrome {
  fn chrome(&self) -> &Chrome;
}

macro_rules! impl_has_chrome {
  ($($view:ty),+ $(,)?) => {
    $(impl HasChrome for $view {
      fn chrome(&self) -> &Chrome {
        &self.chrome
      }
    })+
  };
}

impl_has_chrome!(
  StaticView,
  ContactView,
  ShopView,
  ProductView,
  CartView,
  CheckoutView,
  OrderView,
  ApplicationView,
  DashboardView,
);

/// Pages whose content is fixed (home, about, services).
#[derive(Debug, Clone, Default)]
pub struct StaticView {
  pub chrome: Chrome,
}

#[derive(Debug, Clone, Default)]
pub struct ContactView {
  pub chrome: Chrome,
  pub form: ContactForm,
  pub errors: FieldErrors,
}

#[derive(Debug, Clone, Default)]
pub struct ShopView {
  pub chrome: Chrome,
  pub products: Vec<Product>,
  pub categories: Vec<String>,
  pub active_category: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProductView {
  pub chrome: Chrome,
  pub product: Product,
  pub reviews: Vec<Review>,
  pub review_form: NewReview,
  pub review_errors: FieldErrors,
  /// Errors from an add-to-cart attempt on this page.
  pub cart_errors: FieldErrors,
}

impl ProductView {
  pub fn new(chrome: Chrome, product: Product, reviews: Vec<Review>) -> Self {
    Self {
      chrome,
      product,
      reviews,
      review_form: NewReview::default(),
      review_errors: FieldErrors::default(),
      cart_errors: FieldErrors::default(),
    }
  }
}

#[derive(Debug, Clone)]
pub struct CartView {
  pub chrome: Chrome,
  pub cart: Cart,
  pub errors: FieldErrors,
}

#[derive(Debug, Clone)]
pub struct CheckoutView {
  pub chrome: Chrome,
  pub cart: Cart,
  pub form: CheckoutForm,
  pub errors: FieldErrors,
}

#[derive(Debug, Clone)]
pub struct OrderView {
  pub chrome: Chrome,
  pub order: Order,
}

#[derive(Debug, Clone)]
pub struct ApplicationView {
  pub chrome: Chrome,
  pub kind: ApplicationKind,
  pub form: ApplicationForm,
  pub errors: FieldErrors,
}

/// Aggregate numbers only; the dashboard lists no personal data.
#[derive(Debug, Clone, Default)]
pub struct DashboardStats {
  pub order_count: usize,
  pub revenue_cents: i64,
  pub applications: Vec<(ApplicationKind, usize)>,
  pub message_count: usize,
  pub product_count: usize,
  pub out_of_stock: usize,
  pub open_carts: usize,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
  pub chrome: Chrome,
  pub stats: DashboardStats,
}
