use async_graphql::{Context, ErrorExtensions, Object, Result};
use catalog_api::model::{author::AuthorId, book::BookId};

use crate::{catalog::Catalog, graphql::types::Book};

#[derive(Debug, Default)]
pub struct BookQuery;

#[derive(Debug, Default)]
pub struct BookMutation;

#[Object]
impl BookQuery {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Book>> {
        let catalog = ctx.data::<Catalog>()?;
        let book = catalog
            .get_book(BookId::new(id))
            .await
            .map_err(|err| err.extend())?;
        Ok(book.map(Into::into))
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let catalog = ctx.data::<Catalog>()?;
        let books = catalog.list_books().await.map_err(|err| err.extend())?;
        Ok(books.into_iter().map(Into::into).collect())
    }
}

#[Object]
impl BookMutation {
    /// Add a book
    async fn add_book(&self, ctx: &Context<'_>, name: String, author_id: i32) -> Result<Book> {
        let catalog = ctx.data::<Catalog>()?;
        let book = catalog
            .add_book(&name, AuthorId::new(author_id))
            .await
            .map_err(|err| err.extend())?;
        Ok(book.into())
    }

    /// Replace a book
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: String,
        author_id: i32,
    ) -> Result<Book> {
        let catalog = ctx.data::<Catalog>()?;
        let book = catalog
            .update_book(BookId::new(id), &name, AuthorId::new(author_id))
            .await
            .map_err(|err| err.extend())?;
        Ok(book.into())
    }

    /// Delete a book, returning it as it was before deletion
    async fn delete_book(&self, ctx: &Context<'_>, id: i32) -> Result<Book> {
        let catalog = ctx.data::<Catalog>()?;
        let book = catalog
            .delete_book(BookId::new(id))
            .await
            .map_err(|err| err.extend())?;
        Ok(book.into())
    }
}
