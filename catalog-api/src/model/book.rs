use std::fmt::{self, Display, Formatter};

use crate::model::author::AuthorId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookModel {
    pub id: BookId,
    pub name: String,
    /// Not guaranteed to reference an existing author.
    pub author_id: AuthorId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(pub i32);

impl BookId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn to_name(&self) -> String {
        format!("books/{}", self.0)
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.to_name().fmt(f)
    }
}
