//! Catalog service library.
//!
//! An in-memory authors and books catalog exposed as a GraphQL API.

pub mod author;
pub mod book;
pub mod catalog;
pub mod config;
pub mod error;
pub mod graphql;
pub mod seed;
pub mod sequence;
pub mod tracing;

use catalog::Catalog;
use config::CatalogConfig;
use graphql::{CatalogSchema, build_schema};

/// Builds a GraphQL schema over a fresh in-memory catalog.
pub fn create_catalog_schema(config: &CatalogConfig) -> CatalogSchema {
    build_schema(Catalog::in_memory(config))
}
