use std::sync::Arc;

use catalog_api::model::{
    author::{AuthorId, AuthorModel},
    book::{BookId, BookModel},
};

use crate::{
    author::{
        create_author_command::{CreateAuthorCommand, CreateAuthorCommandInput},
        delete_author_command::DeleteAuthorCommand,
        query_manager::AuthorQueryManager,
        repository::{AuthorRepositoryArc, memory::MemoryAuthorRepository},
        update_author_command::{UpdateAuthorCommand, UpdateAuthorCommandInput},
    },
    book::{
        author_reference::AuthorReferences,
        create_book_command::{CreateBookCommand, CreateBookCommandInput},
        delete_book_command::DeleteBookCommand,
        query_manager::BookQueryManager,
        repository::{BookRepositoryArc, memory::MemoryBookRepository},
        update_book_command::{UpdateBookCommand, UpdateBookCommandInput},
    },
    config::CatalogConfig,
    error::AppResult,
    seed::{seed_authors, seed_books},
};

/// The authors and books catalog.
///
/// Owns both collections through their repositories and exposes every read
/// and write operation. Cloning is cheap and clones share the same data.
#[derive(Debug, Clone)]
pub struct Catalog {
    author_query_manager: AuthorQueryManager,
    book_query_manager: BookQueryManager,
    create_author_command: CreateAuthorCommand,
    update_author_command: UpdateAuthorCommand,
    delete_author_command: DeleteAuthorCommand,
    create_book_command: CreateBookCommand,
    update_book_command: UpdateBookCommand,
    delete_book_command: DeleteBookCommand,
}

impl Catalog {
    pub fn new(
        author_repository: AuthorRepositoryArc,
        book_repository: BookRepositoryArc,
        enforce_author_references: bool,
    ) -> Self {
        let author_references = if enforce_author_references {
            AuthorReferences::enforced(Arc::clone(&author_repository))
        } else {
            AuthorReferences::unchecked()
        };

        Catalog {
            author_query_manager: AuthorQueryManager::new(Arc::clone(&author_repository)),
            book_query_manager: BookQueryManager::new(Arc::clone(&book_repository)),
            create_author_command: CreateAuthorCommand::new(Arc::clone(&author_repository)),
            update_author_command: UpdateAuthorCommand::new(Arc::clone(&author_repository)),
            delete_author_command: DeleteAuthorCommand::new(author_repository),
            create_book_command: CreateBookCommand::new(
                Arc::clone(&book_repository),
                author_references.clone(),
            ),
            update_book_command: UpdateBookCommand::new(
                Arc::clone(&book_repository),
                author_references,
            ),
            delete_book_command: DeleteBookCommand::new(book_repository),
        }
    }

    /// Creates an in-memory catalog, seeded with the built-in authors and
    /// books if `config.seed` is set.
    pub fn in_memory(config: &CatalogConfig) -> Self {
        let (author_repository, book_repository): (AuthorRepositoryArc, BookRepositoryArc) =
            if config.seed {
                (
                    Arc::new(MemoryAuthorRepository::with_data(seed_authors())),
                    Arc::new(MemoryBookRepository::with_data(seed_books())),
                )
            } else {
                (
                    Arc::new(MemoryAuthorRepository::new()),
                    Arc::new(MemoryBookRepository::new()),
                )
            };

        Self::new(
            author_repository,
            book_repository,
            config.enforce_author_references,
        )
    }

    pub async fn get_author(&self, id: AuthorId) -> AppResult<Option<AuthorModel>> {
        self.author_query_manager.query_single(id).await
    }

    pub async fn list_authors(&self) -> AppResult<Vec<AuthorModel>> {
        self.author_query_manager.query_all().await
    }

    pub async fn get_book(&self, id: BookId) -> AppResult<Option<BookModel>> {
        self.book_query_manager.query_single(id).await
    }

    pub async fn list_books(&self) -> AppResult<Vec<BookModel>> {
        self.book_query_manager.query_all().await
    }

    /// Books whose `author_id` is `author_id`, in collection order.
    pub async fn related_books_of(&self, author_id: AuthorId) -> AppResult<Vec<BookModel>> {
        self.book_query_manager.query_by_author(author_id).await
    }

    /// The author referenced by `book`, or `None` if the reference dangles.
    pub async fn author_of(&self, book: &BookModel) -> AppResult<Option<AuthorModel>> {
        self.author_query_manager.query_single(book.author_id).await
    }

    pub async fn add_author(&self, name: &str) -> AppResult<AuthorModel> {
        let output = self
            .create_author_command
            .execute(CreateAuthorCommandInput { name })
            .await?;
        Ok(output.author)
    }

    pub async fn update_author(&self, id: AuthorId, name: &str) -> AppResult<AuthorModel> {
        let output = self
            .update_author_command
            .execute(UpdateAuthorCommandInput { id, name })
            .await?;
        Ok(output.author)
    }

    pub async fn delete_author(&self, id: AuthorId) -> AppResult<AuthorModel> {
        self.delete_author_command.execute(id).await
    }

    pub async fn add_book(&self, name: &str, author_id: AuthorId) -> AppResult<BookModel> {
        let output = self
            .create_book_command
            .execute(CreateBookCommandInput { name, author_id })
            .await?;
        Ok(output.book)
    }

    pub async fn update_book(
        &self,
        id: BookId,
        name: &str,
        author_id: AuthorId,
    ) -> AppResult<BookModel> {
        let output = self
            .update_book_command
            .execute(UpdateBookCommandInput {
                id,
                name,
                author_id,
            })
            .await?;
        Ok(output.book)
    }

    pub async fn delete_book(&self, id: BookId) -> AppResult<BookModel> {
        self.delete_book_command.execute(id).await
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{self, Write},
        sync::Mutex,
    };

    use catalog_api::model::error::{AuthorError, BookError, CatalogError};

    use super::*;
    use crate::error::AppError;

    fn seeded() -> Catalog {
        Catalog::in_memory(&CatalogConfig {
            seed: true,
            enforce_author_references: false,
        })
    }

    fn book_ids(books: &[BookModel]) -> Vec<i32> {
        books.iter().map(|book| book.id.0).collect()
    }

    #[tokio::test]
    async fn seed_data() {
        let catalog = seeded();
        assert_eq!(catalog.list_authors().await.unwrap().len(), 3);
        assert_eq!(catalog.list_books().await.unwrap().len(), 8);

        let tolkien = catalog.get_author(AuthorId(2)).await.unwrap().unwrap();
        assert_eq!(tolkien.name, "J. R. R. Tolkien");
        let books = catalog.related_books_of(AuthorId(2)).await.unwrap();
        assert_eq!(book_ids(&books), vec![4, 5, 6]);
    }

    #[tokio::test]
    async fn get_by_id() {
        let catalog = seeded();
        for book in catalog.list_books().await.unwrap() {
            assert_eq!(catalog.get_book(book.id).await.unwrap(), Some(book));
        }
        assert_eq!(catalog.get_book(BookId(0)).await.unwrap(), None);
        assert_eq!(catalog.get_author(AuthorId(4)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn author_of() {
        let catalog = seeded();
        let book = catalog.get_book(BookId(7)).await.unwrap().unwrap();
        let author = catalog.author_of(&book).await.unwrap().unwrap();
        assert_eq!(author.name, "Brent Weeks");

        let orphan = catalog.add_book("Orphan", AuthorId(40)).await.unwrap();
        assert_eq!(catalog.author_of(&orphan).await.unwrap(), None);
    }

    #[tokio::test]
    async fn add_book() {
        let catalog = seeded();
        let book = catalog.add_book("The Hobbit", AuthorId(2)).await.unwrap();
        assert_eq!(book.id, BookId(9));

        let books = catalog.list_books().await.unwrap();
        assert_eq!(books.len(), 9);
        assert_eq!(books.last(), Some(&book));
        assert_eq!(book.name, "The Hobbit");
        assert_eq!(book.author_id, AuthorId(2));

        let related = catalog.related_books_of(AuthorId(2)).await.unwrap();
        assert_eq!(book_ids(&related), vec![4, 5, 6, 9]);
    }

    #[tokio::test]
    async fn add_author_round_trip() {
        let catalog = seeded();
        let author = catalog.add_author("Ursula K. Le Guin").await.unwrap();
        assert_eq!(author.id, AuthorId(4));
        let found = catalog.get_author(author.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Ursula K. Le Guin");
    }

    #[tokio::test]
    async fn delete_book() {
        let catalog = seeded();
        let deleted = catalog.delete_book(BookId(1)).await.unwrap();
        assert_eq!(deleted.name, "Harry Potter and the Chamber of Secrets");
        assert_eq!(deleted.author_id, AuthorId(1));

        let books = catalog.list_books().await.unwrap();
        assert_eq!(books.len(), 7);
        assert_eq!(book_ids(&books), vec![2, 3, 4, 5, 6, 7, 8]);
        assert!(
            books
                .iter()
                .all(|book| book.name != "Harry Potter and the Chamber of Secrets")
        );

        // Later books keep their ids.
        let book = catalog
            .update_book(BookId(2), "Prisoner", AuthorId(1))
            .await
            .unwrap();
        assert_eq!(book.name, "Prisoner");
        assert_eq!(
            catalog.get_book(BookId(3)).await.unwrap().unwrap().name,
            "Harry Potter and the Goblet of Fire"
        );
    }

    #[tokio::test]
    async fn ids_are_not_reused() {
        let catalog = seeded();
        catalog.delete_book(BookId(8)).await.unwrap();
        let book = catalog.add_book("Shadow's Edge", AuthorId(3)).await.unwrap();
        assert_eq!(book.id, BookId(9));
        assert_eq!(catalog.get_book(BookId(8)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn out_of_range() {
        let catalog = seeded();
        for id in [0, 9] {
            let err = catalog
                .update_book(BookId(id), "X", AuthorId(1))
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                AppError::Catalog(CatalogError::Book(BookError::OutOfRange(BookId(n)))) if n == id
            ));
            let err = catalog.delete_book(BookId(id)).await.unwrap_err();
            assert!(matches!(
                err,
                AppError::Catalog(CatalogError::Book(BookError::OutOfRange(_)))
            ));
        }
        for id in [0, 4] {
            let err = catalog.update_author(AuthorId(id), "X").await.unwrap_err();
            assert!(matches!(
                err,
                AppError::Catalog(CatalogError::Author(AuthorError::OutOfRange(_)))
            ));
            let err = catalog.delete_author(AuthorId(id)).await.unwrap_err();
            assert!(matches!(
                err,
                AppError::Catalog(CatalogError::Author(AuthorError::OutOfRange(_)))
            ));
        }
        assert_eq!(catalog.list_books().await.unwrap().len(), 8);
        assert_eq!(catalog.list_authors().await.unwrap().len(), 3);

        let deleted = catalog.delete_book(BookId(1)).await.unwrap();
        assert_eq!(deleted.id, BookId(1));
        assert!(catalog.delete_book(BookId(1)).await.is_err());
    }

    #[tokio::test]
    async fn delete_author_keeps_books() {
        let catalog = seeded();
        let deleted = catalog.delete_author(AuthorId(1)).await.unwrap();
        assert_eq!(deleted.name, "J. K. Rowling");
        assert_eq!(catalog.list_authors().await.unwrap().len(), 2);

        let books = catalog.related_books_of(AuthorId(1)).await.unwrap();
        assert_eq!(book_ids(&books), vec![1, 2, 3]);
        assert_eq!(catalog.author_of(&books[0]).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_author() {
        let catalog = seeded();
        let author = catalog.update_author(AuthorId(3), "B. Weeks").await.unwrap();
        assert_eq!(author, AuthorModel {
            id: AuthorId(3),
            name: "B. Weeks".into(),
        });
        let names: Vec<_> = catalog
            .list_authors()
            .await
            .unwrap()
            .into_iter()
            .map(|author| author.name)
            .collect();
        assert_eq!(names, vec!["J. K. Rowling", "J. R. R. Tolkien", "B. Weeks"]);
    }

    #[tokio::test]
    async fn enforced_author_references() {
        let catalog = Catalog::in_memory(&CatalogConfig {
            seed: true,
            enforce_author_references: true,
        });
        let err = catalog.add_book("Orphan", AuthorId(9)).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Catalog(CatalogError::Book(BookError::UnknownAuthor(AuthorId(9))))
        ));
        let err = catalog
            .update_book(BookId(1), "Orphan", AuthorId(9))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Catalog(CatalogError::Book(BookError::UnknownAuthor(_)))
        ));
        assert_eq!(
            catalog.get_book(BookId(1)).await.unwrap().unwrap().author_id,
            AuthorId(1)
        );

        let err = catalog
            .update_book(BookId(99), "Orphan", AuthorId(9))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Catalog(CatalogError::Book(BookError::OutOfRange(BookId(99))))
        ));
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn mutation_spans_omit_collections() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let catalog = Catalog::in_memory(&CatalogConfig {
            seed: true,
            enforce_author_references: true,
        });
        catalog.add_book("The Hobbit", AuthorId(2)).await.unwrap();
        catalog
            .update_book(BookId(9), "The Hobbit, or There and Back Again", AuthorId(2))
            .await
            .unwrap();
        catalog.delete_author(AuthorId(3)).await.unwrap();

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Created book"));
        assert!(output.contains("The Hobbit"));
        assert!(output.contains("Deleted author"));
        assert!(!output.contains("Chamber of Secrets"));
        assert!(!output.contains("J. K. Rowling"));
    }

    #[tokio::test]
    async fn empty_catalog() {
        let catalog = Catalog::in_memory(&CatalogConfig::default());
        assert!(catalog.list_authors().await.unwrap().is_empty());
        assert!(catalog.list_books().await.unwrap().is_empty());
        let author = catalog.add_author("A").await.unwrap();
        assert_eq!(author.id, AuthorId(1));
    }
}
