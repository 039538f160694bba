//! Service contracts over the HTTP client
//!
//! Transport failures are folded into a failure envelope so the manager sees
//! exactly one shape of error.

use async_trait::async_trait;
use shared::ServiceResponse;
use shared::error::AppError;
use shared::models::{Booking, BookingStatus, StatusCount, Venue, VenueStatus};
use shared::request::{BulkDeleteRequest, BulkStatusUpdateRequest, ListFilters, StatusUpdateRequest};
use venue_client::{ClientResult, HttpClient};

use super::{BookingService, VenueService};

fn envelope<T>(result: ClientResult<ServiceResponse<T>>) -> ServiceResponse<T> {
    match result {
        Ok(resp) => resp,
        Err(e) => {
            let err = AppError::from(e);
            ServiceResponse::failure_with_code(err.code, err.message)
        }
    }
}

#[async_trait]
impl VenueService for HttpClient {
    async fn list_venues(
        &self,
        status: Option<VenueStatus>,
        filters: &ListFilters,
    ) -> ServiceResponse<Vec<Venue>> {
        envelope(HttpClient::list_venues(self, status, filters).await)
    }

    async fn update_venue_status(
        &self,
        id: i64,
        status: VenueStatus,
        reason: Option<String>,
        notes: Option<String>,
    ) -> ServiceResponse<()> {
        let request = StatusUpdateRequest {
            status,
            reason,
            notes,
        };
        envelope(HttpClient::update_venue_status(self, id, &request).await)
    }

    async fn bulk_update_venue_status(
        &self,
        ids: Vec<i64>,
        status: VenueStatus,
        reason: Option<String>,
        notes: Option<String>,
    ) -> ServiceResponse<()> {
        let request = BulkStatusUpdateRequest {
            ids,
            status,
            reason,
            notes,
        };
        envelope(HttpClient::bulk_update_venue_status(self, &request).await)
    }

    async fn delete_venue(&self, id: i64) -> ServiceResponse<()> {
        envelope(HttpClient::delete_venue(self, id).await)
    }

    async fn bulk_delete_venues(&self, ids: Vec<i64>) -> ServiceResponse<()> {
        envelope(HttpClient::bulk_delete_venues(self, &BulkDeleteRequest { ids }).await)
    }

    async fn get_venue_status_stats(&self) -> ServiceResponse<Vec<StatusCount<VenueStatus>>> {
        envelope(self.venue_status_stats().await)
    }
}

#[async_trait]
impl BookingService for HttpClient {
    async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
        filters: &ListFilters,
    ) -> ServiceResponse<Vec<Booking>> {
        envelope(HttpClient::list_bookings(self, status, filters).await)
    }

    async fn update_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
        notes: Option<String>,
    ) -> ServiceResponse<()> {
        let request = StatusUpdateRequest {
            status,
            reason: None,
            notes,
        };
        envelope(HttpClient::update_booking_status(self, id, &request).await)
    }

    async fn bulk_update_booking_status(
        &self,
        ids: Vec<i64>,
        status: BookingStatus,
        notes: Option<String>,
    ) -> ServiceResponse<()> {
        let request = BulkStatusUpdateRequest {
            ids,
            status,
            reason: None,
            notes,
        };
        envelope(HttpClient::bulk_update_booking_status(self, &request).await)
    }

    async fn get_booking_status_stats(&self) -> ServiceResponse<Vec<StatusCount<BookingStatus>>> {
        envelope(self.booking_status_stats().await)
    }
}
