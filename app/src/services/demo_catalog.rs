// app/src/services/demo_catalog.rs
use chrono::{DateTime, Duration, Utc};
use storefront::{Product, ProductId};

fn row(
  id: i64,
  name: &str,
  category: &str,
  description: &str,
  price: f64,
  stock: i64,
  created_at: DateTime<Utc>,
) -> Product {
  Product {
    id: ProductId::Int(id),
    name: name.to_string(),
    description: Some(description.to_string()),
    category: Some(category.to_string()),
    price: Some(price),
    stock: Some(stock),
    image_url: None,
    created_at: Some(created_at),
  }
}

/// A small tea shop, with ages relative to `now` so every badge shows up.
pub fn products(now: DateTime<Utc>) -> Vec<Product> {
  vec![
    row(1, "Ceremonial Matcha", "matcha", "Stone ground, first harvest", 450.0, 8, now - Duration::days(30)),
    row(2, "Matcha Starter Kit", "matcha", "Bowl, whisk and scoop", 110.0, 3, now - Duration::days(12)),
    row(3, "Roasted Hojicha", "hojicha", "Low caffeine, toasty", 85.0, 0, now - Duration::days(20)),
    row(4, "Single Origin Cocoa", "cocoa", "Ecuador, 70%", 140.0, 15, now - Duration::hours(6)),
    row(5, "Gift Sampler", "gifts", "Three teas in a tin", 160.0, 4, now - Duration::days(1)),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use storefront::{Badge, BadgePolicy};

  #[test]
  fn demo_rows_cover_every_badge() {
    let now = Utc::now();
    let policy = BadgePolicy::default();
    let badges: Vec<Badge> = products(now).iter().flat_map(|p| policy.badges(p, now)).collect();
    for expected in [Badge::OutOfStock, Badge::Sale, Badge::New] {
      assert!(badges.contains(&expected), "missing {:?}", expected);
    }
  }
}
