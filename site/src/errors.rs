// storefront-site/src/errors.rs

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use storefront_core::{escape, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Render Error: {source}")]
  Render {
    #[from]
    source: CoreError,
  },

  #[error("Catalog Error: {0}")]
  Catalog(#[from] serde_json::Error),

  #[error("I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Notification Error: {0}")]
  Notification(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),

  // A workflow halted where the handler expected it to complete.
  #[error("Workflow was halted: {0}")]
  WorkflowHalted(String),
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<AppError>() {
      Ok(app_err) => app_err,
      Err(err) => AppError::Internal(err.to_string()),
    }
  }
}

impl AppError {
  fn public_message(&self) -> String {
    match self {
      AppError::Validation(m) | AppError::NotFound(m) => m.clone(),
      AppError::WorkflowHalted(m) => m.clone(),
      _ => "Something went wrong on our side. Please try again later.".to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::WorkflowHalted(_) => StatusCode::CONFLICT,
      AppError::Config(_)
      | AppError::Render { .. }
      | AppError::Catalog(_)
      | AppError::Io(_)
      | AppError::Notification(_)
      | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with error");
    }
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
      "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{code} {reason}</title></head>\
       <body><main class=\"error-page\"><h1>{code} {reason}</h1><p>{message}</p>\
       <p><a href=\"/\">Back to the home page</a></p></main></body></html>",
      code = status.as_u16(),
      reason = escape(reason),
      message = escape(&self.public_message()),
    );
    HttpResponse::build(status).content_type(ContentType::html()).body(body)
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
