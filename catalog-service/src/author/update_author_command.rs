use catalog_api::model::{
    author::{AuthorId, AuthorModel},
    error::AuthorError,
};
use tracing::info;

use crate::{
    author::repository::{AuthorRecordUpdate, AuthorRepositoryArc},
    error::AppResult,
};

#[derive(Debug, Clone)]
pub struct UpdateAuthorCommand {
    author_repository: AuthorRepositoryArc,
}

#[derive(Debug, Clone)]
pub struct UpdateAuthorCommandInput<'a> {
    pub id: AuthorId,
    pub name: &'a str,
}

#[derive(Debug, Clone)]
pub struct UpdateAuthorCommandOutput {
    pub author: AuthorModel,
}

impl UpdateAuthorCommand {
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        UpdateAuthorCommand { author_repository }
    }

    /// Replaces the author with `input.id`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorError::OutOfRange`] if no author has that id.
    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        input: UpdateAuthorCommandInput<'_>,
    ) -> AppResult<UpdateAuthorCommandOutput> {
        let author = self
            .author_repository
            .update(AuthorRecordUpdate {
                id: input.id,
                name: input.name,
            })
            .await?
            .ok_or(AuthorError::OutOfRange(input.id))?;

        info!(author_id = %author.id, "Updated author");

        Ok(UpdateAuthorCommandOutput {
            author: author.into(),
        })
    }
}
