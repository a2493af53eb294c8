//! Book management module.
//!
//! Provides CRUD operations for books including:
//! - GraphQL adapter for book queries and mutations
//! - Command handlers for create, update, and delete operations
//! - Query manager for retrieving book data
//! - Repository abstraction for data storage

/// GraphQL adapter for books.
pub mod adapter;

/// Author reference policy for book writes.
pub mod author_reference;

/// Book creation command handler.
pub mod create_book_command;

/// Book deletion command handler.
pub mod delete_book_command;

/// Book query manager for data retrieval.
pub mod query_manager;

/// Book repository abstraction and implementations.
pub mod repository;

/// Book update command handler.
pub mod update_book_command;
