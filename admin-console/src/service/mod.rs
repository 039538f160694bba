//! Backend service contracts
//!
//! [`VenueService`] and [`BookingService`] mirror the admin API one call per
//! endpoint and answer with the raw [`ServiceResponse`] envelope.
//! [`EntityBackend`] is the uniform view the generic manager drives;
//! [`VenueBackend`] and [`BookingBackend`] adapt the services to it.

mod http;

use async_trait::async_trait;
use shared::ServiceResponse;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Booking, BookingStatus, StatusCount, Venue, VenueStatus};
use shared::request::ListFilters;

use crate::bulk::{BulkAction, BulkRequest};
use crate::entity::{EntityStatus, ManagedEntity};
use crate::policy::StatusChange;

/// Venue admin endpoints
#[async_trait]
pub trait VenueService: Send + Sync {
    async fn list_venues(
        &self,
        status: Option<VenueStatus>,
        filters: &ListFilters,
    ) -> ServiceResponse<Vec<Venue>>;

    async fn update_venue_status(
        &self,
        id: i64,
        status: VenueStatus,
        reason: Option<String>,
        notes: Option<String>,
    ) -> ServiceResponse<()>;

    async fn bulk_update_venue_status(
        &self,
        ids: Vec<i64>,
        status: VenueStatus,
        reason: Option<String>,
        notes: Option<String>,
    ) -> ServiceResponse<()>;

    async fn delete_venue(&self, id: i64) -> ServiceResponse<()>;

    async fn bulk_delete_venues(&self, ids: Vec<i64>) -> ServiceResponse<()>;

    async fn get_venue_status_stats(&self) -> ServiceResponse<Vec<StatusCount<VenueStatus>>>;
}

/// Booking admin endpoints
#[async_trait]
pub trait BookingService: Send + Sync {
    async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
        filters: &ListFilters,
    ) -> ServiceResponse<Vec<Booking>>;

    async fn update_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
        notes: Option<String>,
    ) -> ServiceResponse<()>;

    async fn bulk_update_booking_status(
        &self,
        ids: Vec<i64>,
        status: BookingStatus,
        notes: Option<String>,
    ) -> ServiceResponse<()>;

    async fn get_booking_status_stats(&self) -> ServiceResponse<Vec<StatusCount<BookingStatus>>>;
}

/// Status type of a backend's entity
pub type StatusOf<B> = <<B as EntityBackend>::Entity as ManagedEntity>::Status;

/// Uniform backend driven by [`crate::EntityManager`]
#[async_trait]
pub trait EntityBackend: Send + Sync {
    type Entity: ManagedEntity;

    async fn list(
        &self,
        status: Option<StatusOf<Self>>,
        filters: &ListFilters,
    ) -> AppResult<Vec<Self::Entity>>;

    async fn status_stats(&self) -> AppResult<Vec<StatusCount<StatusOf<Self>>>>;

    async fn update_status(&self, change: &StatusChange<StatusOf<Self>>) -> AppResult<()>;

    async fn bulk_update_status(
        &self,
        status: StatusOf<Self>,
        request: &BulkRequest<StatusOf<Self>>,
    ) -> AppResult<()>;

    async fn delete(&self, _id: i64) -> AppResult<()> {
        Err(AppError::unsupported(format!(
            "deleting a {}",
            <Self::Entity as ManagedEntity>::KIND
        )))
    }

    async fn bulk_delete(&self, _ids: &[i64]) -> AppResult<()> {
        Err(AppError::unsupported(format!(
            "deleting {}s",
            <Self::Entity as ManagedEntity>::KIND
        )))
    }

    /// Dispatch a confirmed bulk request
    async fn apply_bulk(&self, request: &BulkRequest<StatusOf<Self>>) -> AppResult<()> {
        match request.action {
            BulkAction::SetStatus(status) => self.bulk_update_status(status, request).await,
            BulkAction::Delete => self.bulk_delete(&request.ids).await,
        }
    }
}

/// Mutation outcome; a failure without a code gets `fallback`
fn outcome(resp: ServiceResponse<()>, fallback: ErrorCode) -> AppResult<()> {
    resp.into_outcome(fallback).map(|_| ())
}

/// Status update outcome, falling back to the entity's update-failed code
fn update_outcome<S: EntityStatus>(resp: ServiceResponse<()>) -> AppResult<()> {
    outcome(resp, S::update_failed_code())
}

// ========== Venues ==========

/// [`EntityBackend`] over a [`VenueService`]
#[derive(Debug, Clone)]
pub struct VenueBackend<S> {
    service: S,
}

impl<S: VenueService> VenueBackend<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

#[async_trait]
impl<S: VenueService> EntityBackend for VenueBackend<S> {
    type Entity = Venue;

    async fn list(
        &self,
        status: Option<VenueStatus>,
        filters: &ListFilters,
    ) -> AppResult<Vec<Venue>> {
        self.service.list_venues(status, filters).await.into_result()
    }

    async fn status_stats(&self) -> AppResult<Vec<StatusCount<VenueStatus>>> {
        self.service.get_venue_status_stats().await.into_result()
    }

    async fn update_status(&self, change: &StatusChange<VenueStatus>) -> AppResult<()> {
        let resp = self
            .service
            .update_venue_status(
                change.entity_id,
                change.status,
                change.reason.clone(),
                change.notes.clone(),
            )
            .await;
        update_outcome::<VenueStatus>(resp)
    }

    async fn bulk_update_status(
        &self,
        status: VenueStatus,
        request: &BulkRequest<VenueStatus>,
    ) -> AppResult<()> {
        let resp = self
            .service
            .bulk_update_venue_status(
                request.ids.clone(),
                status,
                request.reason.clone(),
                request.notes.clone(),
            )
            .await;
        update_outcome::<VenueStatus>(resp)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        outcome(
            self.service.delete_venue(id).await,
            ErrorCode::VenueDeleteFailed,
        )
    }

    async fn bulk_delete(&self, ids: &[i64]) -> AppResult<()> {
        outcome(
            self.service.bulk_delete_venues(ids.to_vec()).await,
            ErrorCode::VenueDeleteFailed,
        )
    }
}

// ========== Bookings ==========

/// [`EntityBackend`] over a [`BookingService`]
#[derive(Debug, Clone)]
pub struct BookingBackend<S> {
    service: S,
}

impl<S: BookingService> BookingBackend<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

#[async_trait]
impl<S: BookingService> EntityBackend for BookingBackend<S> {
    type Entity = Booking;

    async fn list(
        &self,
        status: Option<BookingStatus>,
        filters: &ListFilters,
    ) -> AppResult<Vec<Booking>> {
        self.service.list_bookings(status, filters).await.into_result()
    }

    async fn status_stats(&self) -> AppResult<Vec<StatusCount<BookingStatus>>> {
        self.service.get_booking_status_stats().await.into_result()
    }

    async fn update_status(&self, change: &StatusChange<BookingStatus>) -> AppResult<()> {
        let resp = self
            .service
            .update_booking_status(change.entity_id, change.status, change.notes.clone())
            .await;
        update_outcome::<BookingStatus>(resp)
    }

    async fn bulk_update_status(
        &self,
        status: BookingStatus,
        request: &BulkRequest<BookingStatus>,
    ) -> AppResult<()> {
        let resp = self
            .service
            .bulk_update_booking_status(request.ids.clone(), status, request.notes.clone())
            .await;
        update_outcome::<BookingStatus>(resp)
    }
}
