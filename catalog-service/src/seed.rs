//! Built-in catalog contents.

use catalog_api::model::{author::AuthorId, book::BookId};

use crate::{author::repository::AuthorRecordOwned, book::repository::BookRecordOwned};

const AUTHORS: &[(i32, &str)] = &[
    (1, "J. K. Rowling"),
    (2, "J. R. R. Tolkien"),
    (3, "Brent Weeks"),
];

const BOOKS: &[(i32, &str, i32)] = &[
    (1, "Harry Potter and the Chamber of Secrets", 1),
    (2, "Harry Potter and the Prisoner of Azkaban", 1),
    (3, "Harry Potter and the Goblet of Fire", 1),
    (4, "The Fellowship of the Ring", 2),
    (5, "The Two Towers", 2),
    (6, "The Return of the King", 2),
    (7, "The Way of Shadows", 3),
    (8, "Beyond the Shadows", 3),
];

pub fn seed_authors() -> Vec<AuthorRecordOwned> {
    AUTHORS
        .iter()
        .map(|&(id, name)| AuthorRecordOwned {
            id: AuthorId(id),
            name: name.to_string(),
        })
        .collect()
}

pub fn seed_books() -> Vec<BookRecordOwned> {
    BOOKS
        .iter()
        .map(|&(id, name, author_id)| BookRecordOwned {
            id: BookId(id),
            name: name.to_string(),
            author_id: AuthorId(author_id),
        })
        .collect()
}
