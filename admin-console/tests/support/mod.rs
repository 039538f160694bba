// admin-console/tests/support/mod.rs
// In-memory recording fakes of the admin services
#![allow(dead_code)]

use std::sync::Mutex;

use admin_console::{BookingService, VenueService};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::ServiceResponse;
use shared::error::ErrorCode;
use shared::models::{
    Booking, BookingCustomer, BookingStatus, BookingVenue, StatusCount, Venue, VenueOwner,
    VenueStatus,
};
use shared::request::ListFilters;

pub fn venue(id: i64, capacity: u32, price: f64, status: VenueStatus) -> Venue {
    Venue {
        id,
        name: format!("Venue {}", id),
        location: "Porto".to_string(),
        address: None,
        capacity,
        price_per_hour: price,
        status,
        is_active: None,
        venue_type: None,
        owner: VenueOwner {
            id: 100 + id % 2,
            name: format!("Owner {}", 100 + id % 2),
            email: None,
        },
        amenities: vec![],
        images: vec![],
        rating: None,
        review_count: 0,
        revenue: price * 10.0,
        status_reason: None,
        created_at: id,
        status_changed_at: None,
    }
}

pub fn booking(id: i64, venue_id: i64, status: BookingStatus, total: f64) -> Booking {
    Booking {
        id,
        reference: format!("BK-{:04}", id),
        status,
        customer: BookingCustomer {
            id: 500 + id,
            name: format!("Customer {}", id),
            email: None,
        },
        venue: BookingVenue {
            id: venue_id,
            name: format!("Venue {}", venue_id),
        },
        event_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        start_time: "10:00".to_string(),
        end_time: "14:00".to_string(),
        guest_count: 40,
        total_amount: total,
        dispute_reason: None,
        dispute_date: None,
        notes: None,
        created_at: id,
    }
}

fn count_by<S: Copy + PartialEq>(statuses: &[S], all: &[S]) -> Vec<StatusCount<S>> {
    all.iter()
        .map(|s| StatusCount {
            status: *s,
            count: statuses.iter().filter(|x| *x == s).count() as u64,
        })
        .collect()
}

// ========== Venues ==========

#[derive(Debug, Clone, PartialEq)]
pub enum VenueCall {
    List(Option<VenueStatus>),
    Update {
        id: i64,
        status: VenueStatus,
        reason: Option<String>,
        notes: Option<String>,
    },
    BulkUpdate {
        ids: Vec<i64>,
        status: VenueStatus,
        reason: Option<String>,
        notes: Option<String>,
    },
    Delete(i64),
    BulkDelete(Vec<i64>),
    Stats,
}

/// Venue backend that records every call and applies successful mutations
#[derive(Default)]
pub struct FakeVenues {
    venues: Mutex<Vec<Venue>>,
    calls: Mutex<Vec<VenueCall>>,
    fail_list: Mutex<Option<String>>,
    fail_mutations: Mutex<Option<String>>,
}

impl FakeVenues {
    pub fn with(venues: Vec<Venue>) -> Self {
        Self {
            venues: Mutex::new(venues),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<VenueCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutation_calls(&self) -> Vec<VenueCall> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, VenueCall::List(_) | VenueCall::Stats))
            .collect()
    }

    pub fn fail_list(&self, message: Option<&str>) {
        *self.fail_list.lock().unwrap() = message.map(str::to_string);
    }

    pub fn fail_mutations(&self, message: Option<&str>) {
        *self.fail_mutations.lock().unwrap() = message.map(str::to_string);
    }

    fn record(&self, call: VenueCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn mutation_failure(&self) -> Option<ServiceResponse<()>> {
        self.fail_mutations
            .lock()
            .unwrap()
            .clone()
            .map(ServiceResponse::failure)
    }

    fn set_status(&self, ids: &[i64], status: VenueStatus, reason: Option<String>) {
        for v in self.venues.lock().unwrap().iter_mut() {
            if ids.contains(&v.id) {
                v.status = status;
                v.status_reason = reason.clone();
            }
        }
    }
}

#[async_trait]
impl VenueService for FakeVenues {
    async fn list_venues(
        &self,
        status: Option<VenueStatus>,
        _filters: &ListFilters,
    ) -> ServiceResponse<Vec<Venue>> {
        self.record(VenueCall::List(status));
        if let Some(message) = self.fail_list.lock().unwrap().clone() {
            return ServiceResponse::failure_with_code(ErrorCode::NetworkError, message);
        }
        let venues = self.venues.lock().unwrap();
        ServiceResponse::ok(
            venues
                .iter()
                .filter(|v| status.is_none_or(|s| v.status == s))
                .cloned()
                .collect(),
        )
    }

    async fn update_venue_status(
        &self,
        id: i64,
        status: VenueStatus,
        reason: Option<String>,
        notes: Option<String>,
    ) -> ServiceResponse<()> {
        self.record(VenueCall::Update {
            id,
            status,
            reason: reason.clone(),
            notes,
        });
        if let Some(failure) = self.mutation_failure() {
            return failure;
        }
        self.set_status(&[id], status, reason);
        ServiceResponse::done()
    }

    async fn bulk_update_venue_status(
        &self,
        ids: Vec<i64>,
        status: VenueStatus,
        reason: Option<String>,
        notes: Option<String>,
    ) -> ServiceResponse<()> {
        self.record(VenueCall::BulkUpdate {
            ids: ids.clone(),
            status,
            reason: reason.clone(),
            notes,
        });
        if let Some(failure) = self.mutation_failure() {
            return failure;
        }
        self.set_status(&ids, status, reason);
        ServiceResponse::done()
    }

    async fn delete_venue(&self, id: i64) -> ServiceResponse<()> {
        self.record(VenueCall::Delete(id));
        if let Some(failure) = self.mutation_failure() {
            return failure;
        }
        self.venues.lock().unwrap().retain(|v| v.id != id);
        ServiceResponse::done()
    }

    async fn bulk_delete_venues(&self, ids: Vec<i64>) -> ServiceResponse<()> {
        self.record(VenueCall::BulkDelete(ids.clone()));
        if let Some(failure) = self.mutation_failure() {
            return failure;
        }
        self.venues.lock().unwrap().retain(|v| !ids.contains(&v.id));
        ServiceResponse::done()
    }

    async fn get_venue_status_stats(&self) -> ServiceResponse<Vec<StatusCount<VenueStatus>>> {
        self.record(VenueCall::Stats);
        let statuses: Vec<VenueStatus> =
            self.venues.lock().unwrap().iter().map(|v| v.status).collect();
        ServiceResponse::ok(count_by(&statuses, &VenueStatus::ALL))
    }
}

// ========== Bookings ==========

#[derive(Debug, Clone, PartialEq)]
pub enum BookingCall {
    List(Option<BookingStatus>),
    Update {
        id: i64,
        status: BookingStatus,
        notes: Option<String>,
    },
    BulkUpdate {
        ids: Vec<i64>,
        status: BookingStatus,
        notes: Option<String>,
    },
    Stats,
}

#[derive(Default)]
pub struct FakeBookings {
    bookings: Mutex<Vec<Booking>>,
    calls: Mutex<Vec<BookingCall>>,
    fail_mutations: Mutex<Option<String>>,
}

impl FakeBookings {
    pub fn with(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Mutex::new(bookings),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<BookingCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutation_calls(&self) -> Vec<BookingCall> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, BookingCall::List(_) | BookingCall::Stats))
            .collect()
    }

    pub fn fail_mutations(&self, message: Option<&str>) {
        *self.fail_mutations.lock().unwrap() = message.map(str::to_string);
    }

    fn record(&self, call: BookingCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn apply(
        &self,
        ids: &[i64],
        status: BookingStatus,
        notes: Option<String>,
    ) -> ServiceResponse<()> {
        if let Some(message) = self.fail_mutations.lock().unwrap().clone() {
            return ServiceResponse::failure(message);
        }
        for b in self.bookings.lock().unwrap().iter_mut() {
            if ids.contains(&b.id) {
                b.status = status;
                b.notes = notes.clone();
            }
        }
        ServiceResponse::done()
    }
}

#[async_trait]
impl BookingService for FakeBookings {
    async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
        _filters: &ListFilters,
    ) -> ServiceResponse<Vec<Booking>> {
        self.record(BookingCall::List(status));
        let bookings = self.bookings.lock().unwrap();
        ServiceResponse::ok(
            bookings
                .iter()
                .filter(|b| status.is_none_or(|s| b.status == s))
                .cloned()
                .collect(),
        )
    }

    async fn update_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
        notes: Option<String>,
    ) -> ServiceResponse<()> {
        self.record(BookingCall::Update {
            id,
            status,
            notes: notes.clone(),
        });
        self.apply(&[id], status, notes)
    }

    async fn bulk_update_booking_status(
        &self,
        ids: Vec<i64>,
        status: BookingStatus,
        notes: Option<String>,
    ) -> ServiceResponse<()> {
        self.record(BookingCall::BulkUpdate {
            ids: ids.clone(),
            status,
            notes: notes.clone(),
        });
        self.apply(&ids, status, notes)
    }

    async fn get_booking_status_stats(&self) -> ServiceResponse<Vec<StatusCount<BookingStatus>>> {
        self.record(BookingCall::Stats);
        let statuses: Vec<BookingStatus> =
            self.bookings.lock().unwrap().iter().map(|b| b.status).collect();
        ServiceResponse::ok(count_by(&statuses, &BookingStatus::ALL))
    }
}
