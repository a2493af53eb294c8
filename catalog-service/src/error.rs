use async_graphql::ErrorExtensions;
use catalog_api::model::error::{AuthorError, BookError, CatalogError};
use thiserror::Error;
use tracing::error;

/// Application error types.
///
/// Represents all possible errors that can occur in the catalog service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Internal application error.
    ///
    /// Represents unexpected internal errors such as configuration, I/O or
    /// id exhaustion failures.
    #[error("internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// Catalog domain error.
    ///
    /// Raised by mutations that address missing records or references.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

macro_rules! impl_internal_errors {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for AppError {
            fn from(err: $type) -> Self {
                AppError::Internal(Box::new(err))
            }
        }
        )*
    };
}
impl_internal_errors!(config::ConfigError, std::io::Error);

macro_rules! impl_catalog_errors {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for AppError {
            fn from(err: $type) -> Self {
                CatalogError::from(err).into()
            }
        }
        )*
    };
}
impl_catalog_errors!(AuthorError, BookError);

impl ErrorExtensions for AppError {
    /// Converts application errors to GraphQL errors.
    ///
    /// Domain errors keep their message and reason code. Internal errors are
    /// logged and reported without details.
    fn extend(&self) -> async_graphql::Error {
        match self {
            AppError::Catalog(err) => async_graphql::Error::new(err.to_string()).extend_with(
                |_, extensions| {
                    extensions.set("code", err.reason());
                    extensions.set("domain", err.domain());
                },
            ),
            AppError::Internal(_) => {
                error!("internal service error: {}", self);
                async_graphql::Error::new("internal error")
                    .extend_with(|_, extensions| extensions.set("code", "INTERNAL"))
            }
        }
    }
}
