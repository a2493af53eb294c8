/// Monotonic id sequence for a single collection.
///
/// Ids are never reissued, so a record deleted from the collection cannot
/// have its id picked up by a later insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    /// `None` once `i32::MAX` has been issued.
    next: Option<i32>,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence {
    /// Creates a sequence starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Creates a sequence that continues after the largest of `ids`.
    pub fn after<I: IntoIterator<Item = i32>>(ids: I) -> Self {
        ids.into_iter().max().map_or_else(Self::new, |last| Self {
            next: last.checked_add(1).map(|next| next.max(1)),
        })
    }

    /// Returns the next id, or `None` once the id space is exhausted.
    pub fn generate(&mut self) -> Option<i32> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }
}
