// src/gateway/memory.rs

//! In-process stand-in for the data service. Used by the test suites and by the
//! server's demo mode.

use crate::error::FetchError;
use crate::gateway::{GatewayResult, ProductGateway};
use crate::model::{NewOrder, Product, ProductFields, ProductId};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
  products: Vec<Product>,
  orders: Vec<NewOrder>,
  pending_failure: Option<String>,
  calls: usize,
}

/// Lock-protected product and order tables.
///
/// Locks are never held across an `.await`; every operation completes under a
/// single short critical section.
#[derive(Debug, Default)]
pub struct MemoryGateway {
  tables: Mutex<Tables>,
}

impl MemoryGateway {
  pub fn new() -> Self {
    Self::default()
  }

  /// Starts with the given rows, kept exactly as provided (ids and timestamps included).
  pub fn with_products(products: Vec<Product>) -> Self {
    let gateway = Self::default();
    gateway.tables.lock().products = products;
    gateway
  }

  /// The next call, whichever it is, fails with `message` and has no effect.
  pub fn fail_next(&self, message: impl Into<String>) {
    self.tables.lock().pending_failure = Some(message.into());
  }

  /// Order rows inserted so far, oldest first.
  pub fn orders(&self) -> Vec<NewOrder> {
    self.tables.lock().orders.clone()
  }

  /// Current rows in storage order (not sorted).
  pub fn products(&self) -> Vec<Product> {
    self.tables.lock().products.clone()
  }

  /// Number of gateway calls received, failed ones included.
  pub fn calls(&self) -> usize {
    self.tables.lock().calls
  }

  /// Counts the call and consumes an injected failure, if any.
  fn begin_call(tables: &mut Tables, operation: &str) -> GatewayResult<()> {
    tables.calls += 1;
    match tables.pending_failure.take() {
      Some(message) => {
        warn!(operation, %message, "Memory gateway failing call on request.");
        Err(FetchError::new(message))
      }
      None => Ok(()),
    }
  }
}

#[async_trait]
impl ProductGateway for MemoryGateway {
  async fn list(&self) -> GatewayResult<Vec<Product>> {
    let mut tables = self.tables.lock();
    Self::begin_call(&mut tables, "list")?;
    let mut products = tables.products.clone();
    // Newest first; rows without a timestamp sort last.
    products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    debug!(count = products.len(), "Memory gateway listed products.");
    Ok(products)
  }

  async fn insert(&self, fields: &ProductFields) -> GatewayResult<Product> {
    let mut tables = self.tables.lock();
    Self::begin_call(&mut tables, "insert")?;
    let product = Product {
      id: ProductId::Text(Uuid::new_v4().to_string()),
      name: fields.name.clone(),
      description: fields.description.clone(),
      category: fields.category.clone(),
      price: Some(fields.price),
      stock: Some(fields.stock),
      image_url: fields.image_url.clone(),
      created_at: Some(Utc::now()),
    };
    tables.products.push(product.clone());
    debug!(product_id = %product.id, "Memory gateway inserted product.");
    Ok(product)
  }

  async fn update_by_id(&self, id: &ProductId, fields: &ProductFields) -> GatewayResult<()> {
    let mut tables = self.tables.lock();
    Self::begin_call(&mut tables, "update_by_id")?;
    if let Some(product) = tables.products.iter_mut().find(|p| &p.id == id) {
      product.apply(fields);
    }
    Ok(())
  }

  async fn delete_by_id(&self, id: &ProductId) -> GatewayResult<()> {
    let mut tables = self.tables.lock();
    Self::begin_call(&mut tables, "delete_by_id")?;
    tables.products.retain(|p| &p.id != id);
    Ok(())
  }

  async fn insert_order(&self, order: &NewOrder) -> GatewayResult<()> {
    let mut tables = self.tables.lock();
    Self::begin_call(&mut tables, "insert_order")?;
    tables.orders.push(order.clone());
    Ok(())
  }
}
