use catalog_api::model::{
    author::AuthorId,
    book::{BookId, BookModel},
    error::BookError,
};
use tracing::info;

use super::{
    author_reference::AuthorReferences,
    repository::{BookRecordUpdate, BookRepositoryArc},
};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct UpdateBookCommand {
    book_repository: BookRepositoryArc,
    author_references: AuthorReferences,
}

#[derive(Debug)]
pub struct UpdateBookCommandInput<'a> {
    pub id: BookId,
    pub name: &'a str,
    pub author_id: AuthorId,
}

#[derive(Debug)]
pub struct UpdateBookCommandOutput {
    pub book: BookModel,
}

impl UpdateBookCommand {
    pub fn new(book_repository: BookRepositoryArc, author_references: AuthorReferences) -> Self {
        Self {
            book_repository,
            author_references,
        }
    }

    /// Replaces the book with `input.id` by a record built from `input`.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::OutOfRange`] if no book has that id. The book id
    /// is checked before the author reference.
    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        input: UpdateBookCommandInput<'_>,
    ) -> AppResult<UpdateBookCommandOutput> {
        if self.book_repository.select(&input.id).await?.is_none() {
            return Err(BookError::OutOfRange(input.id).into());
        }
        self.author_references.check(input.author_id).await?;

        let record = self
            .book_repository
            .update(BookRecordUpdate {
                id: input.id,
                name: input.name,
                author_id: input.author_id,
            })
            .await?
            .ok_or(BookError::OutOfRange(input.id))?;

        info!(book_id = %record.id, "Updated book");

        Ok(UpdateBookCommandOutput {
            book: record.into(),
        })
    }
}
