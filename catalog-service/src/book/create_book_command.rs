use catalog_api::model::{author::AuthorId, book::BookModel};
use tracing::info;

use super::{
    author_reference::AuthorReferences,
    repository::{BookRecordInsert, BookRepositoryArc},
};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct CreateBookCommand {
    book_repository: BookRepositoryArc,
    author_references: AuthorReferences,
}

#[derive(Debug)]
pub struct CreateBookCommandInput<'a> {
    pub name: &'a str,
    pub author_id: AuthorId,
}

#[derive(Debug)]
pub struct CreateBookCommandOutput {
    pub book: BookModel,
}

impl CreateBookCommand {
    pub fn new(book_repository: BookRepositoryArc, author_references: AuthorReferences) -> Self {
        Self {
            book_repository,
            author_references,
        }
    }

    /// Appends a new book with the next book id.
    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        input: CreateBookCommandInput<'_>,
    ) -> AppResult<CreateBookCommandOutput> {
        self.author_references.check(input.author_id).await?;

        let record = self
            .book_repository
            .insert(BookRecordInsert {
                name: input.name.to_string(),
                author_id: input.author_id,
            })
            .await?;

        info!(
            book_id = %record.id,
            author_id = %record.author_id,
            "Created book"
        );

        Ok(CreateBookCommandOutput {
            book: record.into(),
        })
    }
}
