//! Aggregate statistics for the stats cards

use shared::models::StatusCount;
use shared::money;

use crate::entity::{EntityStatus, ManagedEntity};

/// Per-status counts plus a summed amount
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSummary<S> {
    pub total: u64,
    /// One entry per status, in tab order
    pub counts: Vec<(S, u64)>,
    /// Summed revenue (venues) or booking totals (bookings)
    pub amount: f64,
}

impl<S: EntityStatus> Default for StatusSummary<S> {
    fn default() -> Self {
        Self {
            total: 0,
            counts: S::ALL.iter().map(|s| (*s, 0)).collect(),
            amount: 0.0,
        }
    }
}

impl<S: EntityStatus> StatusSummary<S> {
    /// Reduce a full (unfiltered) collection
    pub fn compute<E>(items: &[E]) -> Self
    where
        E: ManagedEntity<Status = S>,
    {
        let mut summary = Self::default();
        for item in items {
            summary.bump(item.status(), 1);
        }
        summary.total = items.len() as u64;
        summary.amount = money::sum(items.iter().map(|i| i.amount()));
        summary
    }

    /// Build from backend `{status, count}` rows; amount stays 0
    pub fn from_counts(rows: &[StatusCount<S>]) -> Self {
        let mut summary = Self::default();
        for row in rows {
            summary.bump(row.status, row.count);
            summary.total += row.count;
        }
        summary
    }

    fn bump(&mut self, status: S, by: u64) {
        if let Some(entry) = self.counts.iter_mut().find(|(s, _)| *s == status) {
            entry.1 += by;
        }
    }

    pub fn count(&self, status: S) -> u64 {
        self.counts
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }
}
