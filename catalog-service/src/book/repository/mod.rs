use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use catalog_api::model::{
    author::AuthorId,
    book::{BookId, BookModel},
};

use crate::error::AppResult;

/// In-memory repository implementation.
pub mod memory;

/// Book record for insertion operations.
///
/// The id is allocated by the repository.
#[derive(Debug)]
pub struct BookRecordInsert {
    /// Name of the book
    pub name: String,
    /// Identifier of the author
    pub author_id: AuthorId,
}

/// Complete book record with ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecordOwned {
    /// Unique identifier for the book
    pub id: BookId,
    /// Name of the book
    pub name: String,
    /// Identifier of the author, possibly dangling
    pub author_id: AuthorId,
}

/// Full replacement of an existing book record.
#[derive(Debug)]
pub struct BookRecordUpdate<'a> {
    /// Identifier of the book to replace
    pub id: BookId,
    /// New name of the book
    pub name: &'a str,
    /// New author identifier
    pub author_id: AuthorId,
}

/// Storage for the books collection.
#[async_trait]
pub trait BookRepository: Debug {
    async fn insert(&self, record: BookRecordInsert) -> AppResult<BookRecordOwned>;
    async fn update(&self, update: BookRecordUpdate<'_>) -> AppResult<Option<BookRecordOwned>>;
    async fn delete(&self, id: &BookId) -> AppResult<Option<BookRecordOwned>>;
    async fn select(&self, id: &BookId) -> AppResult<Option<BookRecordOwned>>;
    async fn select_all(&self) -> AppResult<Vec<BookRecordOwned>>;
    /// Books written by `author_id`, in collection order.
    async fn select_by_author(&self, author_id: &AuthorId) -> AppResult<Vec<BookRecordOwned>>;
}

pub type BookRepositoryArc = Arc<dyn BookRepository + Send + Sync>;

impl From<BookRecordOwned> for BookModel {
    fn from(record: BookRecordOwned) -> Self {
        BookModel {
            id: record.id,
            name: record.name,
            author_id: record.author_id,
        }
    }
}
