// app/src/web/handlers/mod.rs

pub mod admin_handlers;
pub mod catalog_handlers;

use storefront::{Product, ProductId};

/// Maps a path segment back to the id of a loaded row.
///
/// Ids arrive as text in the URL while the service may key rows by number, so
/// the loaded list decides the shape. Unknown segments stay text.
pub(crate) fn resolve_id(products: &[Product], raw: &str) -> ProductId {
  products
    .iter()
    .map(|p| &p.id)
    .find(|id| id.to_string() == raw)
    .cloned()
    .unwrap_or_else(|| ProductId::from(raw))
}
