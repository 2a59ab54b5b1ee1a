// src/catalog.rs

//! The public catalog page: fetch on mount, search and category filtering,
//! badge-annotated cards and the "Buy Now" order snapshot.

use crate::derived::{self, Badge, BadgePolicy, CategoryFilter};
use crate::error::{Result, StorefrontError};
use crate::gateway::ProductGateway;
use crate::model::{NewOrder, Product, ProductId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const BUY_LABEL: &str = "Buy Now";
pub const SOLD_OUT_LABEL: &str = "Sold out";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogState {
  /// Mounted, first fetch not finished yet.
  Loading,
  /// A fetch has completed (successfully or not) and the list is renderable.
  Ready,
}

/// Why the catalog grid is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
  /// The shop has no products at all.
  NoProducts,
  /// There are products, but none pass the current search and category.
  NoMatches,
}

impl EmptyState {
  pub fn message(&self) -> &'static str {
    match self {
      EmptyState::NoProducts => "No products yet. Add some from the admin page.",
      EmptyState::NoMatches => "No products match the current search or category.",
    }
  }
}

/// One product tile as the catalog renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
  pub product: Product,
  pub badges: Vec<Badge>,
  /// Whether "Buy Now" is enabled.
  pub purchasable: bool,
  pub button_label: &'static str,
}

/// Everything the catalog route needs to draw itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
  pub state: CatalogState,
  pub query: String,
  pub category: CategoryFilter,
  pub categories: Vec<String>,
  pub cards: Vec<ProductCard>,
  /// Number of loaded products before search and category filtering.
  pub total: usize,
  pub empty_state: Option<EmptyState>,
  pub empty_message: Option<&'static str>,
}

/// State owned by one catalog page instance.
pub struct CatalogView {
  gateway: Arc<dyn ProductGateway>,
  policy: BadgePolicy,
  state: CatalogState,
  products: Vec<Product>,
  query: String,
  category: CategoryFilter,
}

impl CatalogView {
  pub fn new(gateway: Arc<dyn ProductGateway>, policy: BadgePolicy) -> Self {
    Self {
      gateway,
      policy,
      state: CatalogState::Loading,
      products: Vec::new(),
      query: String::new(),
      category: CategoryFilter::All,
    }
  }

  /// Fetches the full list. On failure the previous list is kept and the error
  /// is returned for the caller to surface.
  #[instrument(name = "catalog::load", skip(self))]
  pub async fn load(&mut self) -> Result<usize> {
    let fetched = self.gateway.list().await;
    self.state = CatalogState::Ready;
    match fetched {
      Ok(products) => {
        info!("Catalog loaded {} products.", products.len());
        self.products = products;
        Ok(self.products.len())
      }
      Err(e) => {
        warn!(error = %e, "Catalog fetch failed; keeping previous list.");
        Err(StorefrontError::Service(e))
      }
    }
  }

  pub fn state(&self) -> CatalogState {
    self.state
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  pub fn set_query(&mut self, query: impl Into<String>) {
    self.query = query.into();
  }

  pub fn category(&self) -> &CategoryFilter {
    &self.category
  }

  pub fn select_category(&mut self, selection: &str) {
    self.category = CategoryFilter::from_selection(selection);
  }

  pub fn categories(&self) -> Vec<String> {
    derived::categories(&self.products)
  }

  pub fn visible(&self) -> Vec<&Product> {
    derived::filter_products(&self.products, &self.category, &self.query)
  }

  pub fn cards(&self, now: DateTime<Utc>) -> Vec<ProductCard> {
    self
      .visible()
      .into_iter()
      .map(|product| {
        let purchasable = product.purchasable();
        ProductCard {
          product: product.clone(),
          badges: self.policy.badges(product, now),
          purchasable,
          button_label: if purchasable { BUY_LABEL } else { SOLD_OUT_LABEL },
        }
      })
      .collect()
  }

  pub fn empty_state(&self) -> Option<EmptyState> {
    if self.products.is_empty() {
      Some(EmptyState::NoProducts)
    } else if self.visible().is_empty() {
      Some(EmptyState::NoMatches)
    } else {
      None
    }
  }

  pub fn render(&self, now: DateTime<Utc>) -> CatalogPage {
    let empty_state = self.empty_state();
    CatalogPage {
      state: self.state,
      query: self.query.clone(),
      category: self.category.clone(),
      categories: self.categories(),
      cards: self.cards(now),
      total: self.products.len(),
      empty_state,
      empty_message: empty_state.map(|e| e.message()),
    }
  }

  /// "Buy Now": writes an order snapshot of the product as currently listed.
  ///
  /// Refused without a network call when the product is not in the list, is
  /// sold out or has no price. Stock is not decremented and the list is not
  /// re-fetched.
  #[instrument(name = "catalog::buy", skip(self), fields(product_id = %id))]
  pub async fn buy(&self, id: &ProductId) -> Result<NewOrder> {
    let product = self
      .products
      .iter()
      .find(|p| &p.id == id)
      .ok_or_else(|| StorefrontError::UnknownProduct(id.clone()))?;
    let order = match NewOrder::snapshot(product) {
      Some(order) if product.purchasable() => order,
      _ => {
        warn!("Purchase refused: product is out of stock or unpriced.");
        return Err(StorefrontError::OutOfStock(id.clone()));
      }
    };
    self.gateway.insert_order(&order).await.map_err(|e| {
      warn!(error = %e, "Order insert failed.");
      StorefrontError::Service(e)
    })?;
    info!(product_name = %order.product_name, price = order.price, "Order placed.");
    Ok(order)
  }
}
