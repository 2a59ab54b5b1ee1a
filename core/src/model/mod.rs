// src/model/mod.rs

//! Records of the two remote tables the storefront talks to.

pub mod order;
pub mod product;

pub use order::NewOrder;
pub use product::{Product, ProductFields, ProductId};
