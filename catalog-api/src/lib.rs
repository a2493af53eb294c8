//! Catalog API models.
//!
//! Domain types shared by the catalog service and its adapters:
//!
//! - Author and book models with their typed identifiers
//! - Domain errors raised by catalog mutations

pub mod model;
