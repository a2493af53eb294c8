use async_graphql::{Context, ErrorExtensions, Object, Result};
use catalog_api::model::author::AuthorId;

use crate::{catalog::Catalog, graphql::types::Author};

/// Author fields of the root query.
#[derive(Debug, Default)]
pub struct AuthorQuery;

/// Author fields of the root mutation.
#[derive(Debug, Default)]
pub struct AuthorMutation;

#[Object]
impl AuthorQuery {
    /// A single author
    async fn author(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Author>> {
        let catalog = ctx.data::<Catalog>()?;
        let author = catalog
            .get_author(AuthorId::new(id))
            .await
            .map_err(|err| err.extend())?;
        Ok(author.map(Into::into))
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let catalog = ctx.data::<Catalog>()?;
        let authors = catalog.list_authors().await.map_err(|err| err.extend())?;
        Ok(authors.into_iter().map(Into::into).collect())
    }
}

#[Object]
impl AuthorMutation {
    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<Author> {
        let catalog = ctx.data::<Catalog>()?;
        let author = catalog.add_author(&name).await.map_err(|err| err.extend())?;
        Ok(author.into())
    }

    /// Replace the name of an author
    async fn update_author(&self, ctx: &Context<'_>, id: i32, name: String) -> Result<Author> {
        let catalog = ctx.data::<Catalog>()?;
        let author = catalog
            .update_author(AuthorId::new(id), &name)
            .await
            .map_err(|err| err.extend())?;
        Ok(author.into())
    }

    /// Delete an author, returning it as it was before deletion
    async fn delete_author(&self, ctx: &Context<'_>, id: i32) -> Result<Author> {
        let catalog = ctx.data::<Catalog>()?;
        let author = catalog
            .delete_author(AuthorId::new(id))
            .await
            .map_err(|err| err.extend())?;
        Ok(author.into())
    }
}
