//! Load generation counter
//!
//! Each load is stamped with a [`LoadTicket`]. Starting a newer load (or
//! invalidating on a tab/filter change) moves the counter forward, and a
//! response carrying an older ticket is dropped instead of overwriting newer
//! state.

/// Stamp handed out when a load starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic generation counter
#[derive(Debug, Clone, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load; every earlier ticket becomes stale
    pub fn next(&mut self) -> LoadTicket {
        self.current += 1;
        LoadTicket(self.current)
    }

    /// Invalidate in-flight loads without starting a new one
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.current
    }
}
