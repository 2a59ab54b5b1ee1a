// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use chrono::{DateTime, Duration, Utc};
use storefront::{MemoryGateway, Product, ProductForm, ProductId};
use std::sync::Arc;
use tracing::Level;

// --- Fixtures ---

pub fn product(id: &str, name: &str, price: f64, stock: i64) -> Product {
  Product {
    id: ProductId::from(id),
    name: name.to_string(),
    description: None,
    category: None,
    price: Some(price),
    stock: Some(stock),
    image_url: None,
    created_at: Some(Utc::now() - Duration::days(30)),
  }
}

pub fn with_category(mut p: Product, category: &str) -> Product {
  p.category = Some(category.to_string());
  p
}

pub fn with_description(mut p: Product, description: &str) -> Product {
  p.description = Some(description.to_string());
  p
}

pub fn created_at(mut p: Product, at: DateTime<Utc>) -> Product {
  p.created_at = Some(at);
  p
}

pub fn form(name: &str, price: &str, stock: &str) -> ProductForm {
  ProductForm {
    name: name.to_string(),
    price: price.to_string(),
    stock: stock.to_string(),
    ..Default::default()
  }
}

/// A small tea shop, newest first once listed.
pub fn tea_shop() -> Vec<Product> {
  let now = Utc::now();
  vec![
    created_at(
      with_description(with_category(product("p-1", "Ceremonial Matcha", 450.0, 5), "matcha"), "Stone ground"),
      now - Duration::days(10),
    ),
    created_at(
      with_description(with_category(product("p-2", "Matcha Gift Set", 170.0, 2), "Matcha"), "gift box with whisk"),
      now - Duration::days(1),
    ),
    created_at(
      with_description(with_category(product("p-3", "Cocoa Gift Tin", 95.0, 0), "cocoa"), "gift for chocolate fans"),
      now - Duration::days(20),
    ),
    created_at(product("p-4", "Hojicha Sampler", 80.0, 12), now - Duration::hours(2)),
  ]
}

pub fn shop_gateway() -> Arc<MemoryGateway> {
  Arc::new(MemoryGateway::with_products(tea_shop()))
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
