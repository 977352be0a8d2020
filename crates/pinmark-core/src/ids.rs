use crate::points::{PointId, PointStore};

/// Source of fresh point ids.
///
/// A monotonic counter rather than a clock, so any number of creations in
/// one frame yield distinct ids. Ids still present in the store (for example
/// seeded from config) are skipped.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting above the largest id already in `store`.
    pub fn after(store: &PointStore) -> Self {
        let next = store.iter().map(|p| p.id.0).max().map_or(1, |max| max.saturating_add(1));
        Self { next }
    }

    /// Next id that is not present in `store`.
    pub fn next_id(&mut self, store: &PointStore) -> PointId {
        loop {
            let id = PointId(self.next);
            self.next = self.next.wrapping_add(1);
            if !store.contains(id) {
                return id;
            }
        }
    }
}
