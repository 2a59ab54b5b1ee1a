// app/src/services/mod.rs

//! Startup services: choosing the data gateway and seeding the demo catalog.

pub mod demo_catalog;
pub mod gateway;
