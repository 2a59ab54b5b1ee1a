// src/model/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the data service on insert.
///
/// The service may key `products` by a uuid/text column or by an identity
/// column, so both shapes are accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
  Int(i64),
  Text(String),
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ProductId::Int(n) => write!(f, "{}", n),
      ProductId::Text(s) => f.write_str(s),
    }
  }
}

impl From<&str> for ProductId {
  fn from(value: &str) -> Self {
    ProductId::Text(value.to_string())
  }
}

impl From<String> for ProductId {
  fn from(value: String) -> Self {
    ProductId::Text(value)
  }
}

impl From<i64> for ProductId {
  fn from(value: i64) -> Self {
    ProductId::Int(value)
  }
}

/// A row of the remote `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub category: Option<String>,
  // Rows written before form validation existed may hold null here.
  #[serde(default)]
  pub price: Option<f64>,
  #[serde(default)]
  pub stock: Option<i64>,
  #[serde(default)]
  pub image_url: Option<String>,
  // Older rows may predate the column default.
  #[serde(default)]
  pub created_at: Option<DateTime<Utc>>,
}

impl Product {
  /// Whether the catalog should offer the "Buy Now" action: stock is positive
  /// and the price is known.
  pub fn purchasable(&self) -> bool {
    self.price.is_some() && self.stock.is_some_and(|stock| stock > 0)
  }

  /// Overwrites every editable column with `fields`.
  pub fn apply(&mut self, fields: &ProductFields) {
    self.name = fields.name.clone();
    self.description = fields.description.clone();
    self.category = fields.category.clone();
    self.price = Some(fields.price);
    self.stock = Some(fields.stock);
    self.image_url = fields.image_url.clone();
  }
}

/// The editable columns of a product, as sent on insert and update.
///
/// Optional columns are always serialized, so a blank value reaches the service
/// as `null` rather than being left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
  pub name: String,
  pub description: Option<String>,
  pub category: Option<String>,
  pub price: f64,
  pub stock: i64,
  pub image_url: Option<String>,
}

/// Renders a price the way the service's JSON numbers read (`170`, `90.5`).
pub fn price_text(price: f64) -> String {
  format!("{}", price)
}
