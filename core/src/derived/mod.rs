// src/derived/mod.rs

//! Derived views over the in-memory product list.
//!
//! Everything in here is pure and synchronous: the pages recompute it from
//! scratch whenever the search text, the category selection or the list itself
//! changes. Nothing derived is ever written back to the service.

pub mod badges;
pub mod filter;

pub use badges::{Badge, BadgePolicy};
pub use filter::{categories, filter_products, matches_category, matches_search, search_haystack, CategoryFilter, ALL_CATEGORIES};
