//! Multi-select state for bulk actions

use std::collections::BTreeSet;

/// Selected entity ids
///
/// Always a subset of the displayed rows; the manager enforces that by
/// clearing on tab/filter changes and pruning after reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<i64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one id; returns whether it is now selected
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Replace the selection with exactly `visible`
    pub fn select_all<I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = i64>,
    {
        self.ids = visible.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that are no longer visible
    pub fn retain_visible(&mut self, visible: &BTreeSet<i64>) {
        self.ids.retain(|id| visible.contains(id));
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order
    pub fn ids(&self) -> Vec<i64> {
        self.ids.iter().copied().collect()
    }
}
