// src/model/order.rs

use crate::model::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// A row written to the remote `orders` table when a shopper presses "Buy Now".
///
/// Name and price are copied at purchase time and never re-read from the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
  pub product_id: ProductId,
  pub product_name: String,
  pub price: f64,
}

impl NewOrder {
  /// `None` when the product has no price to record.
  pub fn snapshot(product: &Product) -> Option<Self> {
    Some(Self {
      product_id: product.id.clone(),
      product_name: product.name.clone(),
      price: product.price?,
    })
  }
}
