use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use catalog_api::model::author::AuthorId;
use tokio::sync::RwLock;

use crate::{
    author::repository::{
        AuthorRecordInsert, AuthorRecordOwned, AuthorRecordUpdate, AuthorRepository,
    },
    error::{AppError, AppResult},
    sequence::IdSequence,
};

/// In-memory implementation of the author repository.
#[derive(Debug)]
pub struct MemoryAuthorRepository {
    state: Arc<RwLock<AuthorState>>,
}

#[derive(Debug, Default)]
struct AuthorState {
    sequence: IdSequence,
    authors: BTreeMap<AuthorId, AuthorRecordOwned>,
}

impl Default for MemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAuthorRepository {
    /// Creates a new empty memory repository.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(AuthorState::default())),
        }
    }

    /// Creates a new memory repository with initial data.
    ///
    /// New ids continue after the largest id in `authors`.
    ///
    /// # Arguments
    ///
    /// * `authors` - Initial list of authors to populate the repository
    pub fn with_data(authors: Vec<AuthorRecordOwned>) -> Self {
        let sequence = IdSequence::after(authors.iter().map(|author| author.id.0));
        Self {
            state: Arc::new(RwLock::new(AuthorState {
                sequence,
                authors: authors
                    .into_iter()
                    .map(|author| (author.id, author))
                    .collect(),
            })),
        }
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    async fn insert(&self, record: AuthorRecordInsert) -> AppResult<AuthorRecordOwned> {
        let mut state = self.state.write().await;
        let id = state
            .sequence
            .generate()
            .map(AuthorId::new)
            .ok_or_else(|| AppError::Internal("author id sequence exhausted".into()))?;

        let author = AuthorRecordOwned {
            id,
            name: record.name,
        };
        state.authors.insert(id, author.clone());
        Ok(author)
    }

    async fn update(&self, update: AuthorRecordUpdate<'_>) -> AppResult<Option<AuthorRecordOwned>> {
        let mut state = self.state.write().await;
        Ok(state.authors.get_mut(&update.id).map(|author| {
            author.name = update.name.to_string();
            author.clone()
        }))
    }

    async fn delete(&self, id: &AuthorId) -> AppResult<Option<AuthorRecordOwned>> {
        Ok(self.state.write().await.authors.remove(id))
    }

    async fn select(&self, id: &AuthorId) -> AppResult<Option<AuthorRecordOwned>> {
        let state = self.state.read().await;
        Ok(state.authors.get(id).cloned())
    }

    async fn select_all(&self) -> AppResult<Vec<AuthorRecordOwned>> {
        let state = self.state.read().await;
        Ok(state.authors.values().cloned().collect())
    }
}
