// src/gateway/mod.rs

//! The data gateway: table-level access to the remote `products` and `orders`
//! tables.
//!
//! Every call is a single round trip. There is no retry, no backoff and no
//! timeout override; a failure is returned to the caller as a [`FetchError`]
//! carrying the service's own message.

use crate::error::FetchError;
use crate::model::{NewOrder, Product, ProductFields, ProductId};
use async_trait::async_trait;

pub mod memory;
pub mod rest;

pub use memory::MemoryGateway;
pub use rest::{RestConfig, RestGateway};

pub type GatewayResult<T> = std::result::Result<T, FetchError>;

#[async_trait]
pub trait ProductGateway: Send + Sync {
  /// Every product, newest `created_at` first.
  async fn list(&self) -> GatewayResult<Vec<Product>>;

  /// Inserts one product and returns the row as stored by the service.
  async fn insert(&self, fields: &ProductFields) -> GatewayResult<Product>;

  /// Overwrites every editable column of the product keyed by `id`. No
  /// concurrency token: the last writer wins.
  async fn update_by_id(&self, id: &ProductId, fields: &ProductFields) -> GatewayResult<()>;

  /// Deletes the product keyed by `id`. Deleting an id that no longer exists
  /// succeeds.
  async fn delete_by_id(&self, id: &ProductId) -> GatewayResult<()>;

  /// Appends an order snapshot. Stock is not touched.
  async fn insert_order(&self, order: &NewOrder) -> GatewayResult<()>;
}
