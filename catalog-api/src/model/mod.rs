//! Model definitions for the catalog.

/// Author model definitions.
pub mod author;
/// Book model definitions.
pub mod book;
/// Domain errors for the catalog.
pub mod error;
