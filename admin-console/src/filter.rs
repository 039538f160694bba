//! Client-side filter and sort pipeline
//!
//! Every predicate is optional: a blank string, `None` or an unbounded range
//! lets every row through. Active predicates are combined with AND.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{Booking, Venue, VenueType};
use shared::request::{SortDirection, SortField};
use std::cmp::Ordering;

/// Approval state as shown in the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// `is_active() == true`
    Approved,
    /// `is_active() == false`
    Suspended,
}

impl ApprovalStatus {
    fn expects_active(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// Inclusive numeric range; a missing bound is unbounded on that side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange<T> {
    #[serde(default)]
    pub min: Option<T>,
    #[serde(default)]
    pub max: Option<T>,
}

impl<T> Default for NumericRange<T> {
    fn default() -> Self {
        Self { min: None, max: None }
    }
}

impl<T: PartialOrd + Copy> NumericRange<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: T) -> Self {
        Self::new(Some(min), None)
    }

    pub fn at_most(max: T) -> Self {
        Self::new(None, Some(max))
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: T) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Venue list filter panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueFilter {
    /// Matched against name, location and owner name
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub venue_type: Option<VenueType>,
    #[serde(default)]
    pub approval: Option<ApprovalStatus>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub capacity: NumericRange<u32>,
    #[serde(default)]
    pub price: NumericRange<f64>,
}

impl VenueFilter {
    /// No predicate is active
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.venue_type.is_none()
            && self.approval.is_none()
            && self.location.trim().is_empty()
            && self.capacity.is_unbounded()
            && self.price.is_unbounded()
    }
}

/// Case-insensitive substring test; a blank needle matches everything
fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether `venue` passes every active predicate of `filter`
pub fn venue_matches(venue: &Venue, filter: &VenueFilter) -> bool {
    let search = filter.search.trim();
    if !search.is_empty()
        && !(contains_ci(&venue.name, search)
            || contains_ci(&venue.location, search)
            || contains_ci(&venue.owner.name, search))
    {
        return false;
    }

    if let Some(t) = filter.venue_type
        && venue.venue_type != Some(t)
    {
        return false;
    }

    if let Some(approval) = filter.approval
        && venue.is_active() != approval.expects_active()
    {
        return false;
    }

    contains_ci(&venue.location, &filter.location)
        && filter.capacity.contains(venue.capacity)
        && filter.price.contains(venue.price_per_hour)
}

/// Subset of `venues` matching `filter`, in input order
pub fn filter_venues(venues: &[Venue], filter: &VenueFilter) -> Vec<Venue> {
    venues
        .iter()
        .filter(|v| venue_matches(v, filter))
        .cloned()
        .collect()
}

/// Ascending venue comparison on `field`, ties broken by id
pub fn compare_venues(a: &Venue, b: &Venue, field: SortField) -> Ordering {
    let primary = match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Capacity => a.capacity.cmp(&b.capacity),
        SortField::Price => a.price_per_hour.total_cmp(&b.price_per_hour),
        SortField::Rating => a.rating_or_zero().total_cmp(&b.rating_or_zero()),
        SortField::Revenue => a.revenue.total_cmp(&b.revenue),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

/// Sort venues in place
pub fn sort_venues(venues: &mut [Venue], field: SortField, direction: SortDirection) {
    sort_by_direction(venues, direction, |a, b| compare_venues(a, b, field));
}

pub(crate) fn sort_by_direction<T, F>(items: &mut [T], direction: SortDirection, cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    match direction {
        SortDirection::Asc => items.sort_by(|a, b| cmp(a, b)),
        SortDirection::Desc => items.sort_by(|a, b| cmp(b, a)),
    }
}

// ========== Bookings ==========

/// Booking list filter panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingFilter {
    /// Matched against reference code, customer name and venue name
    #[serde(default)]
    pub search: String,
    /// Event date window (inclusive)
    #[serde(default)]
    pub event_date: NumericRange<NaiveDate>,
    #[serde(default)]
    pub amount: NumericRange<f64>,
}

/// Whether `booking` passes every active predicate of `filter`
pub fn booking_matches(booking: &Booking, filter: &BookingFilter) -> bool {
    let search = filter.search.trim();
    if !search.is_empty()
        && !(contains_ci(&booking.reference, search)
            || contains_ci(&booking.customer.name, search)
            || contains_ci(&booking.venue.name, search))
    {
        return false;
    }

    filter.event_date.contains(booking.event_date) && filter.amount.contains(booking.total_amount)
}

/// Subset of `bookings` matching `filter`, in input order
pub fn filter_bookings(bookings: &[Booking], filter: &BookingFilter) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| booking_matches(b, filter))
        .cloned()
        .collect()
}

/// Ascending booking comparison; venue-only fields fall back to the event date
pub fn compare_bookings(a: &Booking, b: &Booking, field: SortField) -> Ordering {
    let primary = match field {
        SortField::Name => a.reference.cmp(&b.reference),
        SortField::Capacity => a.guest_count.cmp(&b.guest_count),
        SortField::Price | SortField::Revenue => a.total_amount.total_cmp(&b.total_amount),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Rating => a.event_date.cmp(&b.event_date),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{BookingCustomer, BookingStatus, BookingVenue, VenueOwner, VenueStatus};

    fn venue(id: i64, capacity: u32, price: f64) -> Venue {
        Venue {
            id,
            name: format!("Venue {}", id),
            location: "Porto".to_string(),
            address: None,
            capacity,
            price_per_hour: price,
            status: VenueStatus::Active,
            is_active: None,
            venue_type: None,
            owner: VenueOwner::default(),
            amenities: vec![],
            images: vec![],
            rating: None,
            review_count: 0,
            revenue: 0.0,
            status_reason: None,
            created_at: id,
            status_changed_at: None,
        }
    }

    fn booking(id: i64, reference: &str, date: &str, amount: f64) -> Booking {
        Booking {
            id,
            reference: reference.to_string(),
            status: BookingStatus::Pending,
            customer: BookingCustomer {
                id: 1,
                name: "Ana Silva".to_string(),
                email: None,
            },
            venue: BookingVenue {
                id: 10,
                name: "Rooftop".to_string(),
            },
            event_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: "18:00".to_string(),
            end_time: "23:00".to_string(),
            guest_count: 40,
            total_amount: amount,
            dispute_reason: None,
            dispute_date: None,
            notes: None,
            created_at: id,
        }
    }

    #[test]
    fn test_capacity_min_scenario() {
        let venues = vec![venue(1, 50, 100.0), venue(2, 150, 300.0)];
        let filter = VenueFilter {
            capacity: NumericRange::at_least(100),
            ..Default::default()
        };
        let ids: Vec<i64> = filter_venues(&venues, &filter).iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let venues = vec![venue(1, 50, 100.0), venue(2, 150, 300.0)];
        let filter = VenueFilter {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert_eq!(filter_venues(&venues, &filter), venues);
    }

    #[test]
    fn test_search_matches_owner_name_case_insensitive() {
        let mut v = venue(1, 50, 100.0);
        v.owner.name = "Maria Costa".to_string();
        let filter = VenueFilter {
            search: "COSTA".to_string(),
            ..Default::default()
        };
        assert!(venue_matches(&v, &filter));

        let filter = VenueFilter {
            search: "lisbon".to_string(),
            ..Default::default()
        };
        assert!(!venue_matches(&v, &filter));
    }

    #[test]
    fn test_approval_uses_active_flag() {
        let mut v = venue(1, 50, 100.0);
        let approved = VenueFilter {
            approval: Some(ApprovalStatus::Approved),
            ..Default::default()
        };
        let suspended = VenueFilter {
            approval: Some(ApprovalStatus::Suspended),
            ..Default::default()
        };
        assert!(venue_matches(&v, &approved));
        assert!(!venue_matches(&v, &suspended));

        v.status = VenueStatus::Pending;
        assert!(!venue_matches(&v, &approved));
        assert!(venue_matches(&v, &suspended));
    }

    #[test]
    fn test_venue_type_exact() {
        let mut v = venue(1, 50, 100.0);
        let filter = VenueFilter {
            venue_type: Some(VenueType::Studio),
            ..Default::default()
        };
        assert!(!venue_matches(&v, &filter));
        v.venue_type = Some(VenueType::Studio);
        assert!(venue_matches(&v, &filter));
    }

    #[test]
    fn test_price_range_inclusive() {
        let venues = vec![venue(1, 10, 100.0), venue(2, 10, 200.0), venue(3, 10, 300.0)];
        let filter = VenueFilter {
            price: NumericRange::new(Some(100.0), Some(200.0)),
            ..Default::default()
        };
        let ids: Vec<i64> = filter_venues(&venues, &filter).iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_sort_venues() {
        let mut venues = vec![venue(1, 80, 100.0), venue(2, 20, 300.0), venue(3, 80, 50.0)];
        sort_venues(&mut venues, SortField::Capacity, SortDirection::Asc);
        let ids: Vec<i64> = venues.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        sort_venues(&mut venues, SortField::Price, SortDirection::Desc);
        let ids: Vec<i64> = venues.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_booking_search_and_amount() {
        let bookings = vec![
            booking(1, "BK-001", "2024-05-01", 500.0),
            booking(2, "BK-002", "2024-05-10", 1500.0),
        ];
        let filter = BookingFilter {
            search: "bk-002".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_bookings(&bookings, &filter).len(), 1);

        let filter = BookingFilter {
            search: "rooftop".to_string(),
            amount: NumericRange::at_most(1000.0),
            ..Default::default()
        };
        let ids: Vec<i64> = filter_bookings(&bookings, &filter).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_booking_date_window() {
        let bookings = vec![
            booking(1, "BK-001", "2024-05-01", 500.0),
            booking(2, "BK-002", "2024-05-10", 500.0),
            booking(3, "BK-003", "2024-05-20", 500.0),
        ];
        let start = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let filter = BookingFilter {
            event_date: NumericRange::new(Some(start), Some(end)),
            ..Default::default()
        };
        let ids: Vec<i64> = filter_bookings(&bookings, &filter).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2]);

        assert_eq!(filter_bookings(&bookings, &BookingFilter::default()).len(), 3);
    }

    #[test]
    fn test_filter_panel_from_json() {
        let filter: VenueFilter = serde_json::from_str(
            r#"{"approval": "suspended", "capacity": {"min": 100}, "price": {"max": 250.5}}"#,
        )
        .unwrap();
        assert_eq!(filter.approval, Some(ApprovalStatus::Suspended));
        assert_eq!(filter.capacity, NumericRange::at_least(100));
        assert_eq!(filter.price.max, Some(250.5));
        assert!(filter.search.is_empty());
        assert!(!filter.is_empty());
    }
}
