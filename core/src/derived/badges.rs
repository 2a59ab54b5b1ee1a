// src/derived/badges.rs

use crate::model::product::Product;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Short label computed from a product's stock, price and age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
  #[serde(rename = "OUT OF STOCK")]
  OutOfStock,
  #[serde(rename = "SALE")]
  Sale,
  #[serde(rename = "NEW")]
  New,
}

impl Badge {
  pub fn label(&self) -> &'static str {
    match self {
      Badge::OutOfStock => "OUT OF STOCK",
      Badge::Sale => "SALE",
      Badge::New => "NEW",
    }
  }
}

/// Thresholds behind the badges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgePolicy {
  /// In-stock products at or below this price are on sale.
  pub sale_price_ceiling: f64,
  /// Products created at most this long ago are new. Elapsed wall-clock time,
  /// not calendar days.
  pub new_window: Duration,
}

impl Default for BadgePolicy {
  fn default() -> Self {
    Self {
      sale_price_ceiling: 120.0,
      new_window: Duration::days(3),
    }
  }
}

impl BadgePolicy {
  pub fn is_new(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let elapsed_ms = now.signed_duration_since(created_at).num_milliseconds();
    elapsed_ms <= self.new_window.num_milliseconds()
  }

  /// In stock and priced at or below the ceiling. An unknown price is never on sale.
  pub fn is_on_sale(&self, product: &Product) -> bool {
    product.stock.is_some_and(|stock| stock > 0)
      && product.price.is_some_and(|price| price <= self.sale_price_ceiling)
  }

  /// Every badge that applies, in display order. Badges are evaluated
  /// independently and may coexist.
  pub fn badges(&self, product: &Product, now: DateTime<Utc>) -> Vec<Badge> {
    let mut out = Vec::with_capacity(2);
    // A missing stock count is treated as none left.
    if product.stock.unwrap_or(0) == 0 {
      out.push(Badge::OutOfStock);
    }
    if self.is_on_sale(product) {
      out.push(Badge::Sale);
    }
    if product.created_at.is_some_and(|created| self.is_new(created, now)) {
      out.push(Badge::New);
    }
    out
  }
}
