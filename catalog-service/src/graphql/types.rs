use async_graphql::{Context, ErrorExtensions, Object, Result};
use catalog_api::model::{author::AuthorModel, book::BookModel};

use crate::catalog::Catalog;

/// This represents an author of a book
pub struct Author(pub AuthorModel);

/// This represents a book written by an author
pub struct Book(pub BookModel);

#[Object]
impl Author {
    async fn id(&self) -> i32 {
        self.0.id.0
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Books written by this author
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let catalog = ctx.data::<Catalog>()?;
        let books = catalog
            .related_books_of(self.0.id)
            .await
            .map_err(|err| err.extend())?;
        Ok(books.into_iter().map(Book).collect())
    }
}

#[Object]
impl Book {
    async fn id(&self) -> i32 {
        self.0.id.0
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn author_id(&self) -> i32 {
        self.0.author_id.0
    }

    /// The author of this book, null if the author no longer exists
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let catalog = ctx.data::<Catalog>()?;
        let author = catalog
            .author_of(&self.0)
            .await
            .map_err(|err| err.extend())?;
        Ok(author.map(Author))
    }
}

impl From<AuthorModel> for Author {
    fn from(author: AuthorModel) -> Self {
        Self(author)
    }
}

impl From<BookModel> for Book {
    fn from(book: BookModel) -> Self {
        Self(book)
    }
}
