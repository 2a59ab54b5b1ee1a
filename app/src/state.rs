// app/src/state.rs
use crate::config::AppConfig;
use std::sync::Arc;
use storefront::{AdminView, CatalogView, ProductGateway};

#[derive(Clone)]
pub struct AppState {
  pub gateway: Arc<dyn ProductGateway>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// A fresh catalog page instance; every request mounts its own.
  pub fn catalog_view(&self) -> CatalogView {
    CatalogView::new(self.gateway.clone(), self.config.badge_policy)
  }

  /// A fresh admin page instance; every request mounts its own.
  pub fn admin_view(&self) -> AdminView {
    AdminView::new(self.gateway.clone(), self.config.form_defaults.clone())
  }
}
