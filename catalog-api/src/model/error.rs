use thiserror::Error;

use crate::model::{author::AuthorId, book::BookId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(transparent)]
pub enum CatalogError {
    Book(#[from] BookError),
    Author(#[from] AuthorError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorError {
    /// A mutation addressed an author that is not in the collection.
    #[error("author `{0}` is out of range")]
    OutOfRange(AuthorId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A mutation addressed a book that is not in the collection.
    #[error("book `{0}` is out of range")]
    OutOfRange(BookId),
    /// Only raised when author references are enforced.
    #[error("author `{0}` does not exist")]
    UnknownAuthor(AuthorId),
}

pub const CATALOG_ERROR_DOMAIN: &str = "catalog";

impl CatalogError {
    /// Stable machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Book(err) => err.reason(),
            Self::Author(err) => err.reason(),
        }
    }

    /// Domain the error originates from, e.g. `catalog/Book`.
    pub fn domain(&self) -> String {
        let kind = match self {
            Self::Book(_) => "Book",
            Self::Author(_) => "Author",
        };
        format!("{CATALOG_ERROR_DOMAIN}/{kind}")
    }
}

impl AuthorError {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::OutOfRange(_) => "OUT_OF_RANGE",
        }
    }
}

impl BookError {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::OutOfRange(_) => "OUT_OF_RANGE",
            Self::UnknownAuthor(_) => "UNKNOWN_AUTHOR",
        }
    }
}
