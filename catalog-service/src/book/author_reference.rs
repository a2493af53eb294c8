use catalog_api::model::{author::AuthorId, error::BookError};

use crate::{author::repository::AuthorRepositoryArc, error::AppResult};

/// Policy for the `author_id` stored on books.
///
/// Unchecked references may dangle; enforced references must name an
/// existing author at the time the book is written.
#[derive(Debug, Clone, Default)]
pub struct AuthorReferences {
    author_repository: Option<AuthorRepositoryArc>,
}

impl AuthorReferences {
    pub fn unchecked() -> Self {
        Self::default()
    }

    pub fn enforced(author_repository: AuthorRepositoryArc) -> Self {
        Self {
            author_repository: Some(author_repository),
        }
    }

    /// # Errors
    ///
    /// Returns [`BookError::UnknownAuthor`] if references are enforced and no
    /// author has `author_id`.
    pub async fn check(&self, author_id: AuthorId) -> AppResult<()> {
        if let Some(author_repository) = &self.author_repository {
            if author_repository.select(&author_id).await?.is_none() {
                return Err(BookError::UnknownAuthor(author_id).into());
            }
        }
        Ok(())
    }
}
