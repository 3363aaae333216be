// storefront-site/src/workflows/contexts.rs

//! Context data for every workflow. Handlers receive these wrapped in
//! `storefront_core::Shared`; the registry dispatches on the context type.

use crate::models::{
  Application, ApplicationForm, ApplicationKind, Cart, CheckoutData, ContactForm, ContactMessage, FieldErrors,
  NewReview, Order, Product, Review, SelectedOptions,
};
use crate::state::AppState;
use uuid::Uuid;

pub struct AddToCartCtx {
  pub app_state: AppState,
  pub cart_id: Uuid,
  pub product_id: Uuid,
  pub quantity: u32,
  pub options: SelectedOptions,
  pub product: Option<Product>,
  pub errors: FieldErrors,
  pub line_id: Option<Uuid>,
}

impl AddToCartCtx {
  pub fn new(app_state: AppState, cart_id: Uuid, product_id: Uuid, quantity: u32, options: SelectedOptions) -> Self {
    Self {
      app_state,
      cart_id,
      product_id,
      quantity,
      options,
      product: None,
      errors: FieldErrors::default(),
      line_id: None,
    }
  }
}

pub struct CheckoutCtx {
  pub app_state: AppState,
  pub cart_id: Uuid,
  pub data: CheckoutData,
  /// Form problems found before the data could be built, see
  /// `CheckoutForm::input_errors`.
  pub input_errors: FieldErrors,
  pub cart: Option<Cart>,
  pub errors: FieldErrors,
  pub order: Option<Order>,
  pub confirmation_sent: bool,
}

impl CheckoutCtx {
  pub fn new(app_state: AppState, cart_id: Uuid, data: CheckoutData) -> Self {
    Self {
      app_state,
      cart_id,
      data,
      input_errors: FieldErrors::default(),
      cart: None,
      errors: FieldErrors::default(),
      order: None,
      confirmation_sent: false,
    }
  }

  pub fn with_input_errors(mut self, input_errors: FieldErrors) -> Self {
    self.input_errors = input_errors;
    self
  }
}

pub struct ApplicationCtx {
  pub app_state: AppState,
  pub kind: ApplicationKind,
  pub form: ApplicationForm,
  pub errors: FieldErrors,
  pub application: Option<Application>,
  pub team_notified: bool,
  pub applicant_acknowledged: bool,
}

impl ApplicationCtx {
  pub fn new(app_state: AppState, kind: ApplicationKind, form: ApplicationForm) -> Self {
    Self {
      app_state,
      kind,
      form,
      errors: FieldErrors::default(),
      application: None,
      team_notified: false,
      applicant_acknowledged: false,
    }
  }
}

pub struct ContactCtx {
  pub app_state: AppState,
  pub form: ContactForm,
  pub errors: FieldErrors,
  pub message: Option<ContactMessage>,
  pub team_notified: bool,
}

impl ContactCtx {
  pub fn new(app_state: AppState, form: ContactForm) -> Self {
    Self {
      app_state,
      form,
      errors: FieldErrors::default(),
      message: None,
      team_notified: false,
    }
  }
}

pub struct ReviewCtx {
  pub app_state: AppState,
  pub product_slug: String,
  pub input: NewReview,
  pub product: Option<Product>,
  pub verified: bool,
  pub errors: FieldErrors,
  pub review: Option<Review>,
}

impl ReviewCtx {
  pub fn new(app_state: AppState, product_slug: String, input: NewReview) -> Self {
    Self {
      app_state,
      product_slug,
      input,
      product: None,
      verified: false,
      errors: FieldErrors::default(),
      review: None,
    }
  }
}
