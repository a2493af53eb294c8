use catalog_api::model::{
    author::{AuthorId, AuthorModel},
    error::AuthorError,
};
use tracing::info;

use crate::{author::repository::AuthorRepositoryArc, error::AppResult};

/// Removes an author. Books referencing the author are left in place.
#[derive(Debug, Clone)]
pub struct DeleteAuthorCommand {
    author_repository: AuthorRepositoryArc,
}

impl DeleteAuthorCommand {
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        DeleteAuthorCommand { author_repository }
    }

    /// Returns the author as it was before removal.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: AuthorId) -> AppResult<AuthorModel> {
        let author = self
            .author_repository
            .delete(&id)
            .await?
            .ok_or(AuthorError::OutOfRange(id))?;

        info!(author_id = %id, "Deleted author");

        Ok(author.into())
    }
}
