// app/src/web/routes.rs

use crate::web::handlers::{admin_handlers, catalog_handlers};
use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` (and the route tests) to mount every endpoint.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      // Storefront
      .service(
        web::scope("/catalog")
          .route("", web::get().to(catalog_handlers::catalog_handler))
          .route("/{product_id}/buy", web::post().to(catalog_handlers::buy_handler)),
      )
      // Back office
      .service(
        web::scope("/admin/products")
          .route("", web::get().to(admin_handlers::list_products_handler))
          .route("", web::post().to(admin_handlers::add_product_handler))
          .route("/{product_id}", web::put().to(admin_handlers::update_product_handler))
          .route("/{product_id}", web::delete().to(admin_handlers::delete_product_handler)),
      ),
  );
}
