// src/gateway/rest.rs

//! [`ProductGateway`] over a PostgREST endpoint (the REST surface Supabase
//! exposes under `/rest/v1`).

use crate::error::FetchError;
use crate::gateway::{GatewayResult, ProductGateway};
use crate::model::{NewOrder, Product, ProductFields, ProductId};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use tracing::{info, instrument, warn};

const PRODUCTS_TABLE: &str = "products";
const ORDERS_TABLE: &str = "orders";

/// Where the data service lives and the key it expects.
#[derive(Clone)]
pub struct RestConfig {
  /// Project URL, e.g. `https://xyzcompany.supabase.co`.
  pub base_url: String,
  /// Anonymous (or service) API key, sent both as `apikey` and as a bearer token.
  pub api_key: String,
}

impl std::fmt::Debug for RestConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RestConfig")
      .field("base_url", &self.base_url)
      .field("api_key", &"[REDACTED]")
      .finish()
  }
}

#[derive(Debug, Clone)]
pub struct RestGateway {
  client: Client,
  config: RestConfig,
}

impl RestGateway {
  pub fn new(config: RestConfig) -> GatewayResult<Self> {
    let client = Client::builder()
      .build()
      .map_err(|e| FetchError::new(format!("Failed to build HTTP client: {}", e)))?;
    Ok(Self::with_client(client, config))
  }

  /// Uses a caller-built `reqwest::Client` (proxies, custom TLS roots, ...).
  pub fn with_client(client: Client, config: RestConfig) -> Self {
    Self { client, config }
  }

  fn table_url(&self, table: &str) -> String {
    table_url(&self.config.base_url, table)
  }

  fn request(&self, method: Method, table: &str) -> RequestBuilder {
    self
      .client
      .request(method, self.table_url(table))
      .header("apikey", &self.config.api_key)
      .bearer_auth(&self.config.api_key)
  }

  /// Turns a non-2xx answer into a [`FetchError`] carrying the service message.
  async fn check(response: Response) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
      return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = service_message(status, &body);
    warn!(status = status.as_u16(), %message, "Data service rejected request.");
    Err(FetchError::with_status(message, status.as_u16()))
  }
}

#[async_trait]
impl ProductGateway for RestGateway {
  #[instrument(name = "gateway::list", skip(self), err)]
  async fn list(&self) -> GatewayResult<Vec<Product>> {
    let response = self
      .request(Method::GET, PRODUCTS_TABLE)
      .query(&[("select", "*"), ("order", "created_at.desc")])
      .send()
      .await?;
    let products: Vec<Product> = Self::check(response).await?.json().await?;
    info!("Fetched {} products.", products.len());
    Ok(products)
  }

  #[instrument(name = "gateway::insert", skip(self, fields), fields(product_name = %fields.name), err)]
  async fn insert(&self, fields: &ProductFields) -> GatewayResult<Product> {
    let response = self
      .request(Method::POST, PRODUCTS_TABLE)
      .header("Prefer", "return=representation")
      .json(&[fields])
      .send()
      .await?;
    let mut rows: Vec<Product> = Self::check(response).await?.json().await?;
    if rows.is_empty() {
      return Err(FetchError::new("Insert succeeded but the service returned no row."));
    }
    let created = rows.swap_remove(0);
    info!(product_id = %created.id, "Product inserted.");
    Ok(created)
  }

  #[instrument(name = "gateway::update_by_id", skip(self, fields), fields(product_id = %id), err)]
  async fn update_by_id(&self, id: &ProductId, fields: &ProductFields) -> GatewayResult<()> {
    let response = self
      .request(Method::PATCH, PRODUCTS_TABLE)
      .query(&[("id", id_filter(id))])
      .header("Prefer", "return=minimal")
      .json(fields)
      .send()
      .await?;
    Self::check(response).await?;
    info!("Product updated.");
    Ok(())
  }

  #[instrument(name = "gateway::delete_by_id", skip(self), fields(product_id = %id), err)]
  async fn delete_by_id(&self, id: &ProductId) -> GatewayResult<()> {
    let response = self
      .request(Method::DELETE, PRODUCTS_TABLE)
      .query(&[("id", id_filter(id))])
      .send()
      .await?;
    Self::check(response).await?;
    info!("Product deleted.");
    Ok(())
  }

  #[instrument(name = "gateway::insert_order", skip(self, order), fields(product_id = %order.product_id), err)]
  async fn insert_order(&self, order: &NewOrder) -> GatewayResult<()> {
    let response = self
      .request(Method::POST, ORDERS_TABLE)
      .header("Prefer", "return=minimal")
      .json(&[order])
      .send()
      .await?;
    Self::check(response).await?;
    info!(product_name = %order.product_name, price = order.price, "Order snapshot inserted.");
    Ok(())
  }
}

fn table_url(base_url: &str, table: &str) -> String {
  format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}

/// PostgREST horizontal filter selecting one row by primary key.
fn id_filter(id: &ProductId) -> String {
  format!("eq.{}", id)
}

/// PostgREST errors are JSON objects with a `message` field; anything else is
/// passed through as text, falling back to the status line.
fn service_message(status: StatusCode, body: &str) -> String {
  if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
      return message.to_string();
    }
  }
  let trimmed = body.trim();
  if !trimmed.is_empty() {
    return trimmed.to_string();
  }
  status
    .canonical_reason()
    .map(str::to_string)
    .unwrap_or_else(|| status.to_string())
}
