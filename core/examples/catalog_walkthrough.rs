// core/examples/catalog_walkthrough.rs

use std::sync::Arc;
use storefront::{
  AdminView, BadgePolicy, CatalogView, FormDefaults, MemoryGateway, ProductForm, ProductId, StorefrontError,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), StorefrontError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Catalog Walkthrough ---");

  // 1. Both pages talk to the same gateway, but each keeps its own list.
  let gateway = Arc::new(MemoryGateway::new());
  let mut admin = AdminView::new(gateway.clone(), FormDefaults::default());
  admin.load().await?;

  // 2. Stock the shop through the admin add form.
  for (name, category, price, stock) in [
    ("Ceremonial Matcha", "matcha", "450", "5"),
    ("Matcha Gift Set", "matcha", "110", "2"),
    ("Cocoa Gift Tin", "cocoa", "95", "0"),
  ] {
    *admin.add_form_mut() = ProductForm {
      name: name.to_string(),
      category: category.to_string(),
      price: price.to_string(),
      stock: stock.to_string(),
      ..Default::default()
    };
    let created = admin.submit_add().await?;
    info!("Added {} ({})", created.name, created.id);
  }

  // 3. The catalog only sees the new rows once it fetches for itself.
  let mut catalog = CatalogView::new(gateway.clone(), BadgePolicy::default());
  catalog.load().await?;
  catalog.select_category("matcha");
  catalog.set_query("gift");
  for card in catalog.cards(chrono::Utc::now()) {
    let badges: Vec<&str> = card.badges.iter().map(|b| b.label()).collect();
    info!("{} -> {:?} [{}]", card.product.name, badges, card.button_label);
  }

  // 4. Buying a sold-out product is refused before any network call.
  let sold_out: ProductId = catalog
    .products()
    .iter()
    .find(|p| !p.purchasable())
    .map(|p| p.id.clone())
    .ok_or_else(|| StorefrontError::UnknownProduct(ProductId::from("sold-out")))?;
  match catalog.buy(&sold_out).await {
    Err(e) => info!("Refused as expected: {}", e),
    Ok(order) => info!("Unexpected order: {:?}", order),
  }

  info!("Orders recorded: {}", gateway.orders().len());
  Ok(())
}
