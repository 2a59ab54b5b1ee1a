// app/src/web/handlers/catalog_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use super::resolve_id;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug, Default)]
pub struct CatalogQuery {
  #[serde(default)]
  pub q: String,
  // "all" or absent shows every category.
  #[serde(default)]
  pub category: Option<String>,
}

#[instrument(name = "handler::catalog", skip(app_state))]
pub async fn catalog_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<CatalogQuery>,
) -> Result<HttpResponse, AppError> {
  let mut catalog = app_state.catalog_view();
  catalog.load().await?;

  let params = query_params.into_inner();
  catalog.set_query(params.q);
  if let Some(selection) = params.category.as_deref() {
    catalog.select_category(selection);
  }

  let page = catalog.render(chrono::Utc::now());
  info!("Catalog rendered with {} visible cards.", page.cards.len());
  Ok(HttpResponse::Ok().json(page))
}

#[instrument(name = "handler::buy", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn buy_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, AppError> {
  let raw_id = path.into_inner();

  let mut catalog = app_state.catalog_view();
  catalog.load().await?;
  let product_id = resolve_id(catalog.products(), &raw_id);

  let order = catalog.buy(&product_id).await?;
  info!("Order placed for '{}'.", order.product_name);

  Ok(HttpResponse::Created().json(json!({
      "message": "Order placed successfully!",
      "order": order
  })))
}
