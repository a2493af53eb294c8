use catalog_api::model::author::{AuthorId, AuthorModel};

use crate::{author::repository::AuthorRepositoryArc, error::AppResult};

#[derive(Debug, Clone)]
pub struct AuthorQueryManager {
    author_repository: AuthorRepositoryArc,
}

impl AuthorQueryManager {
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        AuthorQueryManager { author_repository }
    }

    /// Finds the author with `id`, or `None` if there is no such author.
    pub async fn query_single(&self, id: AuthorId) -> AppResult<Option<AuthorModel>> {
        Ok(self.author_repository.select(&id).await?.map(Into::into))
    }

    pub async fn query_all(&self) -> AppResult<Vec<AuthorModel>> {
        Ok(self
            .author_repository
            .select_all()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
