// app/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use storefront::{FetchError, StorefrontError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Conflict: {0}")]
  Conflict(String),

  // The data service's message, passed through untouched.
  #[error("Data Service Error: {0}")]
  Service(#[from] FetchError),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

impl From<StorefrontError> for AppError {
  fn from(err: StorefrontError) -> Self {
    match err {
      StorefrontError::Validation(e) => AppError::Validation(e.to_string()),
      StorefrontError::Service(e) => AppError::Service(e),
      StorefrontError::OutOfStock(_) => AppError::Conflict(err.to_string()),
      StorefrontError::UnknownProduct(_) => AppError::NotFound(err.to_string()),
      StorefrontError::NotEditing => AppError::Internal(err.to_string()),
    }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Conflict(m) => HttpResponse::Conflict().json(json!({"error": m})),
      AppError::Service(e) => HttpResponse::BadGateway().json(json!({"error": e.message, "status": e.status})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
