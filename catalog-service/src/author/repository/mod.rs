use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use catalog_api::model::author::{AuthorId, AuthorModel};

use crate::error::AppResult;

/// In-memory repository implementation.
pub mod memory;

#[derive(Debug)]
pub struct AuthorRecordInsert {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecordOwned {
    pub id: AuthorId,
    pub name: String,
}

/// Full replacement of an existing author record.
#[derive(Debug)]
pub struct AuthorRecordUpdate<'a> {
    pub id: AuthorId,
    pub name: &'a str,
}

/// Storage for the authors collection.
///
/// Records are kept in ascending id order and ids are allocated by the
/// repository itself.
#[async_trait]
pub trait AuthorRepository: Debug {
    /// Allocates the next id and appends a new record.
    async fn insert(&self, record: AuthorRecordInsert) -> AppResult<AuthorRecordOwned>;
    /// Replaces an existing record. Returns `None` if the id is not present.
    async fn update(&self, update: AuthorRecordUpdate<'_>) -> AppResult<Option<AuthorRecordOwned>>;
    /// Removes a record and returns its last values.
    async fn delete(&self, id: &AuthorId) -> AppResult<Option<AuthorRecordOwned>>;
    async fn select(&self, id: &AuthorId) -> AppResult<Option<AuthorRecordOwned>>;
    async fn select_all(&self) -> AppResult<Vec<AuthorRecordOwned>>;
}

pub type AuthorRepositoryArc = Arc<dyn AuthorRepository + Send + Sync>;

impl From<AuthorRecordOwned> for AuthorModel {
    fn from(record: AuthorRecordOwned) -> Self {
        AuthorModel {
            id: record.id,
            name: record.name,
        }
    }
}
