use catalog_api::model::author::AuthorModel;
use tracing::info;

use crate::{
    author::repository::{AuthorRecordInsert, AuthorRepositoryArc},
    error::AppResult,
};

/// Command for creating new authors.
///
/// The author id is allocated by the repository.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommand {
    author_repository: AuthorRepositoryArc,
}

/// Input data for creating an author.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommandInput<'a> {
    /// Author name, stored as given
    pub name: &'a str,
}

/// Output data from author creation.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommandOutput {
    /// The created author model
    pub author: AuthorModel,
}

impl CreateAuthorCommand {
    /// Creates a new `CreateAuthorCommand`.
    ///
    /// # Arguments
    ///
    /// * `author_repository` - Repository for storing author data
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        Self { author_repository }
    }

    /// Executes the author creation command.
    ///
    /// # Errors
    ///
    /// Returns an error if the author id space is exhausted.
    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        input: CreateAuthorCommandInput<'_>,
    ) -> AppResult<CreateAuthorCommandOutput> {
        info!(name = %input.name, "Creating author");

        let author_record = self
            .author_repository
            .insert(AuthorRecordInsert {
                name: input.name.to_string(),
            })
            .await?;

        info!(author_id = %author_record.id, "Successfully created author");

        Ok(CreateAuthorCommandOutput {
            author: author_record.into(),
        })
    }
}
