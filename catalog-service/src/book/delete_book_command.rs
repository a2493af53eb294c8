use catalog_api::model::{
    book::{BookId, BookModel},
    error::BookError,
};
use tracing::info;

use super::repository::BookRepositoryArc;
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct DeleteBookCommand {
    book_repository: BookRepositoryArc,
}

impl DeleteBookCommand {
    pub fn new(book_repository: BookRepositoryArc) -> Self {
        Self { book_repository }
    }

    /// Removes the book and returns its values from before the removal.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: BookId) -> AppResult<BookModel> {
        let record = self
            .book_repository
            .delete(&id)
            .await?
            .ok_or(BookError::OutOfRange(id))?;

        info!(book_id = %id, "Deleted book");

        Ok(record.into())
    }
}
