use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorModel {
    pub id: AuthorId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AuthorId(pub i32);

impl AuthorId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn to_name(&self) -> String {
        format!("authors/{}", self.0)
    }
}

impl Display for AuthorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.to_name().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(AuthorId::new(2).to_name(), "authors/2");
        assert_eq!(AuthorId(-1).to_string(), "authors/-1");
    }
}
