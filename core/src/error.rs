// storefront_core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
  #[error("Stage not found: {stage}")]
  StageNotFound { stage: String },

  #[error("Handler missing for non-optional stage: {stage}")]
  HandlerMissing { stage: String },

  #[error("Type mismatch while dispatching workflow (expected {expected_type})")]
  TypeMismatch { expected_type: String },

  #[error("Error in user-provided handler. Source: {source}")]
  HandlerError {
    #[source]
    source: AnyhowError,
  },

  #[error("Section '{section}' failed while rendering page '{page}'. Source: {source}")]
  SectionFailed {
    page: String,
    section: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Sitemap priority {priority} for '{path}' is outside [0, 1]")]
  InvalidPriority { path: String, priority: f32 },

  #[error("Configuration error in '{scope}': {message}")]
  Configuration { scope: String, message: String },

  #[error("Internal error: {0}")]
  Internal(String),
}

impl From<AnyhowError> for CoreError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap a CoreError that travelled through anyhow instead of nesting it.
    match err.downcast::<CoreError>() {
      Ok(core_err) => core_err,
      Err(source) => CoreError::HandlerError { source },
    }
  }
}

pub type CoreResult<T, E = CoreError> = std::result::Result<T, E>;
