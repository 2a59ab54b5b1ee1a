// tests/catalog_view_tests.rs
mod common;

use chrono::Utc;
use common::*;
use std::sync::Arc;
use storefront::{
  Badge, BadgePolicy, CatalogState, CatalogView, EmptyState, MemoryGateway, ProductGateway, ProductId, StorefrontError,
};

async fn mounted(gateway: Arc<MemoryGateway>) -> CatalogView {
  let mut view = CatalogView::new(gateway, BadgePolicy::default());
  view.load().await.unwrap();
  view
}

#[tokio::test]
async fn test_mount_lists_newest_first() {
  setup_tracing();
  let gateway = shop_gateway();
  let mut view = CatalogView::new(gateway, BadgePolicy::default());
  assert_eq!(view.state(), CatalogState::Loading);

  assert_eq!(view.load().await.unwrap(), 4);
  assert_eq!(view.state(), CatalogState::Ready);
  let ids: Vec<String> = view.products().iter().map(|p| p.id.to_string()).collect();
  assert_eq!(ids, vec!["p-4", "p-2", "p-1", "p-3"]);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_list() {
  setup_tracing();
  let gateway = shop_gateway();
  let mut view = mounted(gateway.clone()).await;

  gateway.fail_next("JWT expired");
  let err = view.load().await.unwrap_err();
  assert_eq!(err.to_string(), "JWT expired");
  assert_eq!(view.products().len(), 4);
  assert_eq!(view.state(), CatalogState::Ready);
}

#[tokio::test]
async fn test_categories_come_from_current_list() {
  setup_tracing();
  let view = mounted(shop_gateway()).await;
  // "Matcha" (newer) appears before "matcha"; both are distinct as written.
  assert_eq!(view.categories(), vec!["all", "Matcha", "matcha", "cocoa"]);
}

#[tokio::test]
async fn test_category_and_search_are_a_strict_and() {
  setup_tracing();
  let mut view = mounted(shop_gateway()).await;
  view.select_category("matcha");
  view.set_query("gift");

  let names: Vec<&str> = view.visible().iter().map(|p| p.name.as_str()).collect();
  // Cocoa Gift Tin matches "gift" but not the category; Ceremonial Matcha the reverse.
  assert_eq!(names, vec!["Matcha Gift Set"]);

  view.select_category("all");
  let names: Vec<&str> = view.visible().iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, vec!["Matcha Gift Set", "Cocoa Gift Tin"]);
}

#[tokio::test]
async fn test_search_matches_price_as_text() {
  setup_tracing();
  let mut view = mounted(shop_gateway()).await;
  view.set_query("70");
  let names: Vec<&str> = view.visible().iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, vec!["Matcha Gift Set"]);
}

#[tokio::test]
async fn test_cards_carry_badges_and_purchase_state() {
  setup_tracing();
  let view = mounted(shop_gateway()).await;
  let cards = view.cards(Utc::now());
  let card = |id: &str| cards.iter().find(|c| c.product.id == ProductId::from(id)).unwrap();

  // 80, in stock, two hours old.
  assert_eq!(card("p-4").badges, vec![Badge::Sale, Badge::New]);
  // 170, one day old.
  assert_eq!(card("p-2").badges, vec![Badge::New]);
  // 450, ten days old.
  assert!(card("p-1").badges.is_empty());
  // 95 but sold out.
  assert_eq!(card("p-3").badges, vec![Badge::OutOfStock]);
  assert!(!card("p-3").purchasable);
  assert_eq!(card("p-3").button_label, "Sold out");
  assert!(card("p-4").purchasable);
  assert_eq!(card("p-4").button_label, "Buy Now");
}

#[tokio::test]
async fn test_buy_inserts_snapshot_without_touching_stock() {
  setup_tracing();
  let gateway = shop_gateway();
  let view = mounted(gateway.clone()).await;

  let order = view.buy(&ProductId::from("p-2")).await.unwrap();
  assert_eq!(order.product_name, "Matcha Gift Set");
  assert_eq!(order.price, 170.0);
  assert_eq!(gateway.orders(), vec![order]);

  let listed = gateway.list().await.unwrap();
  let p2 = listed.iter().find(|p| p.id == ProductId::from("p-2")).unwrap();
  assert_eq!(p2.stock, Some(2));
}

#[tokio::test]
async fn test_buy_sold_out_product_never_reaches_gateway() {
  setup_tracing();
  let gateway = shop_gateway();
  let view = mounted(gateway.clone()).await;
  let calls_before = gateway.calls();

  let err = view.buy(&ProductId::from("p-3")).await.unwrap_err();
  assert_eq!(err, StorefrontError::OutOfStock(ProductId::from("p-3")));
  assert_eq!(gateway.calls(), calls_before);
  assert!(gateway.orders().is_empty());
}

#[tokio::test]
async fn test_buy_unknown_product() {
  setup_tracing();
  let view = mounted(shop_gateway()).await;
  let err = view.buy(&ProductId::from("missing")).await.unwrap_err();
  assert!(matches!(err, StorefrontError::UnknownProduct(_)));
}

#[tokio::test]
async fn test_buy_surfaces_service_message() {
  setup_tracing();
  let gateway = shop_gateway();
  let view = mounted(gateway.clone()).await;
  gateway.fail_next("permission denied for table orders");

  let err = view.buy(&ProductId::from("p-4")).await.unwrap_err();
  assert_eq!(err.to_string(), "permission denied for table orders");
  assert!(gateway.orders().is_empty());
}

#[tokio::test]
async fn test_empty_states() {
  setup_tracing();
  let empty = mounted(Arc::new(MemoryGateway::new())).await;
  assert_eq!(empty.empty_state(), Some(EmptyState::NoProducts));

  let mut view = mounted(shop_gateway()).await;
  assert_eq!(view.empty_state(), None);
  view.set_query("oolong");
  assert_eq!(view.empty_state(), Some(EmptyState::NoMatches));

  let page = view.render(Utc::now());
  assert!(page.cards.is_empty());
  assert_eq!(page.query, "oolong");
  assert_eq!(page.total, 4);
  assert_eq!(page.empty_state, Some(EmptyState::NoMatches));
  assert_eq!(page.empty_message, Some(EmptyState::NoMatches.message()));

  view.set_query("gift");
  let page = view.render(Utc::now());
  assert_eq!((page.cards.len(), page.total), (2, 4));
  assert_eq!(page.empty_message, None);
}

#[tokio::test]
async fn test_row_without_price_or_stock_still_lists() {
  setup_tracing();
  let mut unpriced = product("p-9", "Legacy Blend", 0.0, 0);
  unpriced.price = None;
  unpriced.stock = None;
  let gateway = Arc::new(MemoryGateway::with_products(vec![product("p-1", "Sencha", 60.0, 3), unpriced]));
  let view = mounted(gateway.clone()).await;
  assert_eq!(view.products().len(), 2);

  let cards = view.cards(Utc::now());
  let legacy = cards.iter().find(|c| c.product.id == ProductId::from("p-9")).unwrap();
  assert!(!legacy.purchasable);
  assert_eq!(legacy.badges, vec![Badge::OutOfStock]);

  let err = view.buy(&ProductId::from("p-9")).await.unwrap_err();
  assert_eq!(err, StorefrontError::OutOfStock(ProductId::from("p-9")));
  assert!(gateway.orders().is_empty());
}
