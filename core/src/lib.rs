// src/lib.rs

//! Storefront: catalog and admin page logic for a small shop whose products live
//! in a hosted PostgREST data service.
//!
//! The crate is organised around the pieces every storefront page shares:
//!  - A `ProductGateway` trait for the remote `products` / `orders` tables, with a
//!    REST implementation and an in-memory one.
//!  - Pure derived-view helpers: category extraction, search, category filtering,
//!    "new" classification and badges.
//!  - Form validation that turns raw text input into normalized product fields.
//!  - The two page state machines, `CatalogView` and `AdminView`.
//!
//! Every mutation is followed by a full re-fetch of the product list; nothing is
//! reconciled locally.

pub mod admin;
pub mod catalog;
pub mod derived;
pub mod error;
pub mod gateway;
pub mod model;
pub mod notice;
pub mod validation;

// --- Re-exports for the Public API ---

pub use crate::admin::{AdminPage, AdminState, AdminView, Confirm, DeleteOutcome, EditSession, DELETE_PROMPT};
pub use crate::catalog::{CatalogPage, CatalogState, CatalogView, EmptyState, ProductCard};
pub use crate::derived::{Badge, BadgePolicy, CategoryFilter, ALL_CATEGORIES};
pub use crate::error::{FetchError, Result, StorefrontError, ValidationError};
pub use crate::gateway::{GatewayResult, MemoryGateway, ProductGateway, RestConfig, RestGateway};
pub use crate::model::{NewOrder, Product, ProductFields, ProductId};
pub use crate::notice::Notice;
pub use crate::validation::{FormDefaults, ProductForm};
