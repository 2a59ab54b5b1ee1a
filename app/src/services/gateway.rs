// app/src/services/gateway.rs
use crate::config::{AppConfig, GatewayKind};
use crate::errors::{AppError, Result as AppResult};
use crate::services::demo_catalog;
use std::sync::Arc;
use storefront::{MemoryGateway, ProductGateway, RestGateway};
use tracing::info;

/// Builds the gateway selected by `STOREFRONT_GATEWAY`.
pub fn build_gateway(config: &AppConfig) -> AppResult<Arc<dyn ProductGateway>> {
  match config.gateway {
    GatewayKind::Rest => {
      let rest = config
        .rest
        .clone()
        .ok_or_else(|| AppError::Config("REST gateway selected without service settings".to_string()))?;
      info!(base_url = %rest.base_url, "Using hosted data service");
      let gateway = RestGateway::new(rest)?;
      Ok(Arc::new(gateway))
    }
    GatewayKind::Memory => {
      let gateway = if config.seed_demo_catalog {
        let products = demo_catalog::products(chrono::Utc::now());
        info!(count = products.len(), "Seeding in-memory catalog with demo products");
        MemoryGateway::with_products(products)
      } else {
        MemoryGateway::new()
      };
      info!("Using in-memory gateway; data is lost on restart");
      Ok(Arc::new(gateway))
    }
  }
}
