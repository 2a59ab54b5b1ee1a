// src/validation.rs

//! Product form handling: raw text in, normalized [`ProductFields`] out.

use crate::error::ValidationError;
use crate::model::product::{price_text, Product, ProductFields};
use serde::{Deserialize, Serialize};

/// Values applied to blank form input before it is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDefaults {
  /// Used when the category box is left blank. `None` sends `null`.
  pub category: Option<String>,
}

/// What a user typed into the add or edit form, as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductForm {
  pub name: String,
  pub description: String,
  pub category: String,
  pub price: String,
  pub stock: String,
  pub image_url: String,
}

impl ProductForm {
  /// Pre-fills a form from an existing record, nulls becoming empty boxes.
  pub fn from_product(product: &Product) -> Self {
    Self {
      name: product.name.clone(),
      description: product.description.clone().unwrap_or_default(),
      category: product.category.clone().unwrap_or_default(),
      price: product.price.map(price_text).unwrap_or_default(),
      stock: product.stock.map(|stock| stock.to_string()).unwrap_or_default(),
      image_url: product.image_url.clone().unwrap_or_default(),
    }
  }

  pub fn clear(&mut self) {
    *self = ProductForm::default();
  }

  pub fn validate(&self) -> Result<ProductFields, ValidationError> {
    self.validate_with(&FormDefaults::default())
  }

  /// Checks, in order, that the name is non-empty, the price is a number
  /// greater than 0 and the stock is a whole number of at least 0. Every text
  /// value is trimmed and blank optional values become `None`.
  pub fn validate_with(&self, defaults: &FormDefaults) -> Result<ProductFields, ValidationError> {
    let name = self.name.trim();
    if name.is_empty() {
      return Err(ValidationError::MissingName);
    }

    let price = match parse_number(&self.price) {
      Some(p) if p > 0.0 => p,
      _ => {
        return Err(ValidationError::InvalidPrice {
          input: self.price.clone(),
        })
      }
    };

    let stock = match parse_number(&self.stock) {
      Some(s) if s < 0.0 => {
        return Err(ValidationError::InvalidStock {
          input: self.stock.clone(),
        })
      }
      Some(s) if s.fract() != 0.0 || s > i64::MAX as f64 => {
        return Err(ValidationError::FractionalStock {
          input: self.stock.clone(),
        })
      }
      Some(s) => s as i64,
      None => {
        return Err(ValidationError::InvalidStock {
          input: self.stock.clone(),
        })
      }
    };

    let category = non_blank(&self.category).or_else(|| defaults.category.clone());

    Ok(ProductFields {
      name: name.to_string(),
      description: non_blank(&self.description),
      category,
      price,
      stock,
      image_url: non_blank(&self.image_url),
    })
  }
}

/// Numeric form input: surrounding whitespace ignored, a blank box reads as 0,
/// anything that is not a finite number is rejected.
fn parse_number(raw: &str) -> Option<f64> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Some(0.0);
  }
  trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn non_blank(raw: &str) -> Option<String> {
  let trimmed = raw.trim();
  (!trimmed.is_empty()).then(|| trimmed.to_string())
}
