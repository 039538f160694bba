//! Manageable entity abstraction
//!
//! Venues and bookings share one list/dialog/bulk machinery. The differences
//! (status enum, which statuses need a justification, client-side filter and
//! sort) are expressed through [`ManagedEntity`] and [`EntityStatus`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::ErrorCode;
use shared::models::{Booking, BookingStatus, Venue, VenueStatus};
use shared::request::SortField;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::filter::{self, BookingFilter, VenueFilter};

/// Which operator input satisfies the justification gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justification {
    /// A reason string (venues)
    Reason,
    /// A note (bookings)
    Note,
}

impl Justification {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reason => "reason",
            Self::Note => "note",
        }
    }
}

/// Lifecycle status of a managed entity
pub trait EntityStatus:
    Copy + Eq + Hash + Debug + Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Every status, in tab order
    const ALL: &'static [Self];

    /// Which input the justification gate reads
    const JUSTIFICATION: Justification;

    /// Entering this status needs a non-empty justification
    fn requires_justification(&self) -> bool;

    /// Code reported when the justification is missing
    fn missing_justification_code() -> ErrorCode;

    /// Code reported when the target equals the current status
    fn unchanged_code() -> ErrorCode;

    /// Code reported when the backend rejects an update
    fn update_failed_code() -> ErrorCode;
}

impl EntityStatus for VenueStatus {
    const ALL: &'static [Self] = &VenueStatus::ALL;
    const JUSTIFICATION: Justification = Justification::Reason;

    fn requires_justification(&self) -> bool {
        self.requires_reason()
    }

    fn missing_justification_code() -> ErrorCode {
        ErrorCode::VenueReasonRequired
    }

    fn unchanged_code() -> ErrorCode {
        ErrorCode::VenueStatusUnchanged
    }

    fn update_failed_code() -> ErrorCode {
        ErrorCode::VenueUpdateFailed
    }
}

impl EntityStatus for BookingStatus {
    const ALL: &'static [Self] = &BookingStatus::ALL;
    const JUSTIFICATION: Justification = Justification::Note;

    fn requires_justification(&self) -> bool {
        self.requires_note()
    }

    fn missing_justification_code() -> ErrorCode {
        ErrorCode::BookingNoteRequired
    }

    fn unchanged_code() -> ErrorCode {
        ErrorCode::BookingStatusUnchanged
    }

    fn update_failed_code() -> ErrorCode {
        ErrorCode::BookingUpdateFailed
    }
}

/// An entity the admin screens list, filter and transition
pub trait ManagedEntity: Clone + Debug + Send + Sync + 'static {
    type Status: EntityStatus;
    /// Client-side filter applied on top of the loaded collection
    type Filter: Default + Clone + Debug + Send + Sync;

    /// Human-facing kind, used in log lines and messages
    const KIND: &'static str;
    /// Whether the backend supports deleting this entity
    const DELETABLE: bool;

    fn id(&self) -> i64;
    fn status(&self) -> Self::Status;
    /// Amount that feeds the aggregate cards (revenue / booking total)
    fn amount(&self) -> f64;
    fn matches(&self, filter: &Self::Filter) -> bool;
    /// Ascending comparison on `field`
    fn compare(a: &Self, b: &Self, field: SortField) -> Ordering;
}

impl ManagedEntity for Venue {
    type Status = VenueStatus;
    type Filter = VenueFilter;

    const KIND: &'static str = "venue";
    const DELETABLE: bool = true;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> VenueStatus {
        self.status
    }

    fn amount(&self) -> f64 {
        self.revenue
    }

    fn matches(&self, filter: &VenueFilter) -> bool {
        filter::venue_matches(self, filter)
    }

    fn compare(a: &Self, b: &Self, field: SortField) -> Ordering {
        filter::compare_venues(a, b, field)
    }
}

impl ManagedEntity for Booking {
    type Status = BookingStatus;
    type Filter = BookingFilter;

    const KIND: &'static str = "booking";
    const DELETABLE: bool = false;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> BookingStatus {
        self.status
    }

    fn amount(&self) -> f64 {
        self.total_amount
    }

    fn matches(&self, filter: &BookingFilter) -> bool {
        filter::booking_matches(self, filter)
    }

    fn compare(a: &Self, b: &Self, field: SortField) -> Ordering {
        filter::compare_bookings(a, b, field)
    }
}
