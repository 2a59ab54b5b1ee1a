// app/src/web/handlers/admin_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use storefront::{DeleteOutcome, ProductForm};
use tracing::{info, instrument, warn};

use super::resolve_id;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug, Default)]
pub struct AdminQuery {
  #[serde(default)]
  pub q: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct DeleteQuery {
  // Stands in for the confirmation prompt; anything but `true` declines.
  #[serde(default)]
  pub confirm: Option<String>,
}

impl DeleteQuery {
  fn confirmed(&self) -> bool {
    self.confirm.as_deref() == Some("true")
  }
}

#[instrument(name = "handler::admin_list", skip(app_state))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<AdminQuery>,
) -> Result<HttpResponse, AppError> {
  let mut admin = app_state.admin_view();
  admin.load().await?;
  admin.set_query(query_params.into_inner().q);

  let page = admin.render();
  info!("Admin table rendered with {} of {} rows.", page.rows.len(), page.total);
  Ok(HttpResponse::Ok().json(page))
}

#[instrument(name = "handler::admin_add", skip(app_state, req_body), fields(product_name = %req_body.name))]
pub async fn add_product_handler(
  app_state: web::Data<AppState>,
  req_body: web::Json<ProductForm>,
) -> Result<HttpResponse, AppError> {
  let mut admin = app_state.admin_view();
  admin.load().await?;

  *admin.add_form_mut() = req_body.into_inner();
  let created = admin.submit_add().await?;

  Ok(HttpResponse::Created().json(json!({
      "message": "Product added.",
      "product": created,
      "notice": admin.notice()
  })))
}

#[instrument(name = "handler::admin_update", skip(app_state, path, req_body), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_body: web::Json<ProductForm>,
) -> Result<HttpResponse, AppError> {
  let raw_id = path.into_inner();

  let mut admin = app_state.admin_view();
  admin.load().await?;
  let product_id = resolve_id(admin.products(), &raw_id);

  admin.begin_edit(&product_id)?;
  if let Some(form) = admin.edit_form_mut() {
    *form = req_body.into_inner();
  }
  admin.save_edit().await?;

  let product = admin.products().iter().find(|p| p.id == product_id).cloned();
  Ok(HttpResponse::Ok().json(json!({
      "message": "Changes saved.",
      "product": product,
      "notice": admin.notice()
  })))
}

#[instrument(name = "handler::admin_delete", skip(app_state, path, query_params), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  query_params: web::Query<DeleteQuery>,
) -> Result<HttpResponse, AppError> {
  let raw_id = path.into_inner();
  let confirmed = query_params.confirmed();

  let mut admin = app_state.admin_view();
  admin.load().await?;
  let product_id = resolve_id(admin.products(), &raw_id);

  let outcome = admin.delete(&product_id, &mut |_prompt: &str| confirmed).await?;
  if outcome == DeleteOutcome::Declined {
    warn!("Delete requested without confirmation; nothing sent.");
  }

  Ok(HttpResponse::Ok().json(json!({
      "outcome": outcome,
      "notice": admin.notice()
  })))
}
