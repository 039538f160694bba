//! Admin console: the venue and booking screens behind one admin gate

use shared::error::AppResult;

use crate::analytics::{OwnerAnalytics, OwnerRow, owner_leaderboard};
use crate::banner::Banner;
use crate::manager::{BookingManager, VenueManager};
use crate::service::{BookingBackend, BookingService, VenueBackend, VenueService};
use crate::session::{AccessDenied, Session};

pub struct AdminConsole<VS: VenueService, BS: BookingService> {
    venues: VenueManager<VS>,
    bookings: BookingManager<BS>,
}

impl<VS: VenueService, BS: BookingService> AdminConsole<VS, BS> {
    /// Build both screens for `session`; non-admins get [`AccessDenied`]
    pub fn open(
        session: Session,
        venue_service: VS,
        booking_service: BS,
    ) -> Result<Self, AccessDenied> {
        tracing::info!(user = %session.user_id, role = ?session.role, "Opening admin console");
        let venues = VenueManager::new(session.clone(), VenueBackend::new(venue_service))?;
        let bookings = BookingManager::new(session, BookingBackend::new(booking_service))?;
        Ok(Self { venues, bookings })
    }

    pub fn venues(&self) -> &VenueManager<VS> {
        &self.venues
    }

    pub fn venues_mut(&mut self) -> &mut VenueManager<VS> {
        &mut self.venues
    }

    pub fn bookings(&self) -> &BookingManager<BS> {
        &self.bookings
    }

    pub fn bookings_mut(&mut self) -> &mut BookingManager<BS> {
        &mut self.bookings
    }

    /// Reload both screens; both are attempted, the first failure is returned
    pub async fn refresh_all(&mut self) -> AppResult<()> {
        let venues = self.venues.reload().await;
        let bookings = self.bookings.reload().await;
        venues.and(bookings)
    }

    pub fn owner_analytics(&self, owner_id: i64) -> OwnerAnalytics {
        OwnerAnalytics::compute(owner_id, self.venues.all_items(), self.bookings.all_items())
    }

    pub fn owner_leaderboard(&self, limit: usize) -> Vec<OwnerRow> {
        owner_leaderboard(self.venues.all_items(), limit)
    }

    /// Banners currently raised on either screen
    pub fn banners(&self) -> Vec<&Banner> {
        self.venues
            .banner()
            .into_iter()
            .chain(self.bookings.banner())
            .collect()
    }
}
