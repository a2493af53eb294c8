//! GraphQL schema for the catalog.
//!
//! Root objects are merged from the per-domain adapters in
//! [`crate::author::adapter`] and [`crate::book::adapter`]. The [`Catalog`]
//! is carried as schema data and looked up by every resolver.

/// GraphQL object types for authors and books.
pub mod types;

use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Router, extract::State, routing::post};

use crate::{
    author::adapter::{AuthorMutation, AuthorQuery},
    book::adapter::{BookMutation, BookQuery},
    catalog::Catalog,
};

/// Root Query
#[derive(MergedObject, Default)]
#[graphql(name = "Query")]
pub struct QueryRoot(BookQuery, AuthorQuery);

/// Root Mutation
#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct MutationRoot(BookMutation, AuthorMutation);

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub const GRAPHQL_PATH: &str = "/graphql";

pub fn build_schema(catalog: Catalog) -> CatalogSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(catalog)
    .finish()
}

/// Routes GraphQL requests on [`GRAPHQL_PATH`] to `schema`.
pub fn router(schema: CatalogSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, post(graphql_handler))
        .with_state(schema)
}

async fn graphql_handler(
    State(schema): State<CatalogSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}
