use catalog_api::model::{
    author::AuthorId,
    book::{BookId, BookModel},
};

use super::repository::BookRepositoryArc;
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct BookQueryManager {
    book_repository: BookRepositoryArc,
}

impl BookQueryManager {
    pub fn new(book_repository: BookRepositoryArc) -> Self {
        BookQueryManager { book_repository }
    }

    pub async fn query_single(&self, id: BookId) -> AppResult<Option<BookModel>> {
        Ok(self.book_repository.select(&id).await?.map(Into::into))
    }

    pub async fn query_all(&self) -> AppResult<Vec<BookModel>> {
        Ok(self
            .book_repository
            .select_all()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Lists books written by `author_id` in collection order.
    pub async fn query_by_author(&self, author_id: AuthorId) -> AppResult<Vec<BookModel>> {
        Ok(self
            .book_repository
            .select_by_author(&author_id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
