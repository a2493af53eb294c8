use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use catalog_api::model::{author::AuthorId, book::BookId};
use itertools::Itertools;
use tokio::sync::RwLock;

use crate::{
    book::repository::{BookRecordInsert, BookRecordOwned, BookRecordUpdate, BookRepository},
    error::{AppError, AppResult},
    sequence::IdSequence,
};

/// In-memory implementation of the book repository.
#[derive(Debug)]
pub struct MemoryBookRepository {
    state: Arc<RwLock<BookState>>,
}

#[derive(Debug, Default)]
struct BookState {
    sequence: IdSequence,
    books: BTreeMap<BookId, BookRecordOwned>,
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBookRepository {
    /// Creates a new empty memory book repository.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(BookState::default())),
        }
    }

    /// Creates a new memory book repository with initial data.
    ///
    /// # Arguments
    ///
    /// * `books` - Initial books to populate the repository with
    pub fn with_data(books: Vec<BookRecordOwned>) -> Self {
        let sequence = IdSequence::after(books.iter().map(|book| book.id.0));
        Self {
            state: Arc::new(RwLock::new(BookState {
                sequence,
                books: books.into_iter().map(|book| (book.id, book)).collect(),
            })),
        }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn insert(&self, record: BookRecordInsert) -> AppResult<BookRecordOwned> {
        let mut state = self.state.write().await;
        let id = state
            .sequence
            .generate()
            .map(BookId::new)
            .ok_or_else(|| AppError::Internal("book id sequence exhausted".into()))?;

        let book = BookRecordOwned {
            id,
            name: record.name,
            author_id: record.author_id,
        };
        state.books.insert(id, book.clone());
        Ok(book)
    }

    async fn update(&self, update: BookRecordUpdate<'_>) -> AppResult<Option<BookRecordOwned>> {
        let mut state = self.state.write().await;
        Ok(state.books.get_mut(&update.id).map(|book| {
            *book = BookRecordOwned {
                id: update.id,
                name: update.name.to_string(),
                author_id: update.author_id,
            };
            book.clone()
        }))
    }

    async fn delete(&self, id: &BookId) -> AppResult<Option<BookRecordOwned>> {
        Ok(self.state.write().await.books.remove(id))
    }

    async fn select(&self, id: &BookId) -> AppResult<Option<BookRecordOwned>> {
        let state = self.state.read().await;
        Ok(state.books.get(id).cloned())
    }

    async fn select_all(&self) -> AppResult<Vec<BookRecordOwned>> {
        let state = self.state.read().await;
        Ok(state.books.values().cloned().collect())
    }

    async fn select_by_author(&self, author_id: &AuthorId) -> AppResult<Vec<BookRecordOwned>> {
        let state = self.state.read().await;
        Ok(state
            .books
            .values()
            .filter(|book| book.author_id == *author_id)
            .cloned()
            .collect_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i32, name: &str, author_id: i32) -> BookRecordOwned {
        BookRecordOwned {
            id: BookId(id),
            name: name.into(),
            author_id: AuthorId(author_id),
        }
    }

    #[tokio::test]
    async fn select_by_author() {
        let repository = MemoryBookRepository::with_data(vec![
            record(1, "A", 1),
            record(2, "B", 2),
            record(3, "C", 1),
            record(4, "D", 3),
        ]);
        let books = repository.select_by_author(&AuthorId(1)).await.unwrap();
        assert_eq!(books, vec![record(1, "A", 1), record(3, "C", 1)]);
        assert!(
            repository
                .select_by_author(&AuthorId(9))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn insert_after_delete() {
        let repository = MemoryBookRepository::with_data(vec![record(1, "A", 1), record(2, "B", 1)]);
        repository.delete(&BookId(2)).await.unwrap();
        let book = repository
            .insert(BookRecordInsert {
                name: "C".into(),
                author_id: AuthorId(42),
            })
            .await
            .unwrap();
        assert_eq!(book, record(3, "C", 42));
        assert_eq!(
            repository.select_all().await.unwrap(),
            vec![record(1, "A", 1), record(3, "C", 42)]
        );
    }

    #[tokio::test]
    async fn update_replaces_record() {
        let repository = MemoryBookRepository::with_data(vec![record(1, "A", 1)]);
        let book = repository
            .update(BookRecordUpdate {
                id: BookId(1),
                name: "B",
                author_id: AuthorId(2),
            })
            .await
            .unwrap();
        assert_eq!(book, Some(record(1, "B", 2)));
        assert_eq!(
            repository.select(&BookId(1)).await.unwrap(),
            Some(record(1, "B", 2))
        );
    }
}
