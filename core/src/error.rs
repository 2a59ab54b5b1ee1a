// src/error.rs
use crate::model::ProductId;
use thiserror::Error;

/// Failure reported by the data service, or by the transport on the way to it.
///
/// `message` is what the user gets to see, verbatim. `status` is the HTTP status
/// when the service answered at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
  pub message: String,
  pub status: Option<u16>,
}

impl FetchError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      status: None,
    }
  }

  pub fn with_status(message: impl Into<String>, status: u16) -> Self {
    Self {
      message: message.into(),
      status: Some(status),
    }
  }
}

impl From<reqwest::Error> for FetchError {
  fn from(err: reqwest::Error) -> Self {
    Self {
      message: err.to_string(),
      status: err.status().map(|s| s.as_u16()),
    }
  }
}

impl From<serde_json::Error> for FetchError {
  fn from(err: serde_json::Error) -> Self {
    FetchError::new(format!("Malformed response from data service: {}", err))
  }
}

/// Client-side rejection of a product form. No network call is made when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Product name is required")]
  MissingName,

  #[error("Price must be greater than 0 (got '{input}')")]
  InvalidPrice { input: String },

  #[error("Stock must be 0 or more (got '{input}')")]
  InvalidStock { input: String },

  #[error("Stock must be a whole number (got '{input}')")]
  FractionalStock { input: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorefrontError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error(transparent)]
  Service(#[from] FetchError),

  #[error("Product {0} is out of stock")]
  OutOfStock(ProductId),

  #[error("Product {0} not found")]
  UnknownProduct(ProductId),

  #[error("No product is being edited")]
  NotEditing,
}

pub type Result<T, E = StorefrontError> = std::result::Result<T, E>;
