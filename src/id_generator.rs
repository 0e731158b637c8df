use crate::element::{ElementId, ShapeKind};

/// Single counter for all elements of a session.
///
/// Starts at 1 and only ever goes up, so every minted id is unique for the
/// life of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementCounter {
    next: u64,
}

impl Default for ElementCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl ElementCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number the next minted id will carry
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Mint `<kind>_<n>` and advance the counter by one
    pub fn generate_id(&mut self, kind: ShapeKind) -> ElementId {
        let id = ElementId::new(kind, self.next);
        self.next += 1;
        id
    }
}
