// src/derived/filter.rs

use crate::model::product::{price_text, Product};
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// Sentinel selection meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "all";

/// Distinct, trimmed, non-empty categories in order of first appearance,
/// prefixed with [`ALL_CATEGORIES`].
pub fn categories(products: &[Product]) -> Vec<String> {
  let mut seen = HashSet::new();
  let mut out = vec![ALL_CATEGORIES.to_string()];
  for product in products {
    let Some(raw) = product.category.as_deref() else {
      continue;
    };
    let category = raw.trim();
    if category.is_empty() {
      continue;
    }
    if seen.insert(category) {
      out.push(category.to_string());
    }
  }
  out
}

/// The text a search query is matched against: name, description, category,
/// price and stock joined by single spaces. Absent or blank fields are skipped.
pub fn search_haystack(product: &Product) -> String {
  let price = product.price.map(price_text);
  let stock = product.stock.map(|stock| stock.to_string());
  [
    Some(product.name.as_str()),
    product.description.as_deref(),
    product.category.as_deref(),
    price.as_deref(),
    stock.as_deref(),
  ]
  .into_iter()
  .flatten()
  .filter(|part| !part.is_empty())
  .collect::<Vec<_>>()
  .join(" ")
}

/// Case-insensitive substring match of the trimmed `query`. An empty query
/// matches everything.
pub fn matches_search(product: &Product, query: &str) -> bool {
  let needle = query.trim().to_lowercase();
  if needle.is_empty() {
    return true;
  }
  search_haystack(product).to_lowercase().contains(&needle)
}

/// The category a page is currently filtering on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
  #[default]
  All,
  Named(String),
}

impl CategoryFilter {
  /// Interprets a raw selection; blank or the sentinel selects everything.
  pub fn from_selection(selection: &str) -> Self {
    let selection = selection.trim();
    if selection.is_empty() || selection == ALL_CATEGORIES {
      CategoryFilter::All
    } else {
      CategoryFilter::Named(selection.to_string())
    }
  }

  pub fn as_selection(&self) -> &str {
    match self {
      CategoryFilter::All => ALL_CATEGORIES,
      CategoryFilter::Named(name) => name,
    }
  }
}

impl Serialize for CategoryFilter {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_selection())
  }
}

pub fn matches_category(product: &Product, filter: &CategoryFilter) -> bool {
  match filter {
    CategoryFilter::All => true,
    CategoryFilter::Named(wanted) => product
      .category
      .as_deref()
      .map(|c| c.trim().to_lowercase() == wanted.to_lowercase())
      .unwrap_or(false),
  }
}

/// Single pass over `products` keeping rows that pass both the category filter
/// and the search query. Source order is preserved.
pub fn filter_products<'a>(products: &'a [Product], filter: &CategoryFilter, query: &str) -> Vec<&'a Product> {
  let visible: Vec<&Product> = products
    .iter()
    .filter(|p| matches_category(p, filter) && matches_search(p, query))
    .collect();
  tracing::debug!(
    total = products.len(),
    visible = visible.len(),
    category = filter.as_selection(),
    "Derived filtered product view."
  );
  visible
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::ProductId;

  fn product(name: &str, category: Option<&str>, price: f64, stock: i64) -> Product {
    Product {
      id: ProductId::from(name),
      name: name.to_string(),
      description: None,
      category: category.map(str::to_string),
      price: Some(price),
      stock: Some(stock),
      image_url: None,
      created_at: None,
    }
  }

  #[test]
  fn categories_are_trimmed_deduplicated_and_ordered() {
    let products = vec![
      product("a", Some(" matcha "), 100.0, 1),
      product("b", None, 100.0, 1),
      product("c", Some("cocoa"), 100.0, 1),
      product("d", Some("matcha"), 100.0, 1),
      product("e", Some("   "), 100.0, 1),
    ];
    assert_eq!(categories(&products), vec!["all", "matcha", "cocoa"]);
  }

  #[test]
  fn haystack_skips_missing_fields() {
    let mut p = product("Dark 70%", None, 90.0, 10);
    assert_eq!(search_haystack(&p), "Dark 70% 90 10");
    p.description = Some("Single origin".to_string());
    p.category = Some("chocolate".to_string());
    assert_eq!(search_haystack(&p), "Dark 70% Single origin chocolate 90 10");
    p.price = None;
    p.stock = None;
    assert_eq!(search_haystack(&p), "Dark 70% Single origin chocolate");
    assert!(!matches_search(&p, "90"));
  }

  #[test]
  fn search_matches_price_substring() {
    let p = product("Gift Box", None, 170.0, 2);
    assert!(matches_search(&p, "70"));
    assert!(matches_search(&p, "  GIFT "));
    assert!(matches_search(&p, ""));
    assert!(!matches_search(&p, "matcha"));
  }

  #[test]
  fn category_filter_is_case_insensitive_and_sentinel_passes() {
    let p = product("Latte", Some("Matcha"), 150.0, 1);
    assert!(matches_category(&p, &CategoryFilter::from_selection("matcha")));
    assert!(matches_category(&p, &CategoryFilter::from_selection("all")));
    assert!(!matches_category(&p, &CategoryFilter::from_selection("cocoa")));
    let uncategorized = product("Plain", None, 150.0, 1);
    assert!(!matches_category(&uncategorized, &CategoryFilter::Named("matcha".to_string())));
  }
}
