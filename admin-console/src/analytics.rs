//! Owner analytics
//!
//! Pure reductions over already-loaded venues and bookings, feeding the
//! owner-facing widgets and the platform leaderboard.

use std::collections::{BTreeMap, HashSet};

use shared::models::{Booking, BookingStatus, Venue};
use shared::money;

use crate::stats::StatusSummary;

/// Default size of the top-venues list
pub const TOP_VENUES: usize = 5;

/// Revenue line of one venue
#[derive(Debug, Clone, PartialEq)]
pub struct VenueRevenue {
    pub venue_id: i64,
    pub name: String,
    pub revenue: f64,
}

/// Analytics for one owner's portfolio
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerAnalytics {
    pub owner_id: i64,
    pub venue_count: usize,
    pub active_venues: usize,
    /// Sum of the venues' reported revenue
    pub venue_revenue: f64,
    /// Bookings placed on the owner's venues
    pub bookings: StatusSummary<BookingStatus>,
    /// Sum of confirmed and completed booking totals
    pub booking_revenue: f64,
    /// Review-weighted rating; `None` until the first review
    pub average_rating: Option<f64>,
    pub top_venues: Vec<VenueRevenue>,
}

impl OwnerAnalytics {
    pub fn compute(owner_id: i64, venues: &[Venue], bookings: &[Booking]) -> Self {
        Self::compute_with_top(owner_id, venues, bookings, TOP_VENUES)
    }

    pub fn compute_with_top(
        owner_id: i64,
        venues: &[Venue],
        bookings: &[Booking],
        top_n: usize,
    ) -> Self {
        let owned: Vec<&Venue> = venues.iter().filter(|v| v.owner.id == owner_id).collect();
        let venue_ids: HashSet<i64> = owned.iter().map(|v| v.id).collect();
        let owned_bookings: Vec<Booking> = bookings
            .iter()
            .filter(|b| venue_ids.contains(&b.venue.id))
            .cloned()
            .collect();

        let booking_revenue = money::sum(
            owned_bookings
                .iter()
                .filter(|b| b.status.is_billable())
                .map(|b| b.total_amount),
        );

        let mut top: Vec<&Venue> = owned.clone();
        top.sort_by(|a, b| b.revenue.total_cmp(&a.revenue).then_with(|| a.id.cmp(&b.id)));
        let top_venues = top
            .into_iter()
            .take(top_n)
            .map(|v| VenueRevenue {
                venue_id: v.id,
                name: v.name.clone(),
                revenue: v.revenue,
            })
            .collect();

        Self {
            owner_id,
            venue_count: owned.len(),
            active_venues: owned.iter().filter(|v| v.is_active()).count(),
            venue_revenue: money::sum(owned.iter().map(|v| v.revenue)),
            bookings: StatusSummary::compute(&owned_bookings),
            booking_revenue,
            average_rating: weighted_rating(&owned),
            top_venues,
        }
    }
}

fn weighted_rating(venues: &[&Venue]) -> Option<f64> {
    let (weighted, reviews) = venues
        .iter()
        .filter_map(|v| v.rating.map(|r| (r, v.review_count)))
        .filter(|(_, n)| *n > 0)
        .fold((0.0, 0u64), |(sum, total), (r, n)| {
            (sum + r * f64::from(n), total + u64::from(n))
        });
    (reviews > 0).then(|| weighted / reviews as f64)
}

/// One row of the owner leaderboard
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerRow {
    pub owner_id: i64,
    pub owner_name: String,
    pub venue_count: usize,
    pub revenue: f64,
}

/// Owners ranked by total venue revenue, highest first
pub fn owner_leaderboard(venues: &[Venue], limit: usize) -> Vec<OwnerRow> {
    let mut by_owner: BTreeMap<i64, (String, Vec<f64>)> = BTreeMap::new();
    for venue in venues {
        let entry = by_owner
            .entry(venue.owner.id)
            .or_insert_with(|| (venue.owner.name.clone(), Vec::new()));
        entry.1.push(venue.revenue);
    }

    let mut rows: Vec<OwnerRow> = by_owner
        .into_iter()
        .map(|(owner_id, (owner_name, revenues))| OwnerRow {
            owner_id,
            owner_name,
            venue_count: revenues.len(),
            revenue: money::sum(revenues),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.owner_id.cmp(&b.owner_id))
    });
    rows.truncate(limit);
    rows
}
