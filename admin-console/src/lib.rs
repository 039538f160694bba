//! Admin Console - view-model core for the venue marketplace admin screens
//!
//! Everything a screen needs to decide what to render and which backend call
//! to issue: client-side filtering, the status-transition policy, selection
//! and bulk actions, aggregate statistics and owner analytics. Rendering is
//! left to the caller.

pub mod analytics;
pub mod banner;
pub mod bulk;
pub mod config;
pub mod console;
pub mod entity;
pub mod filter;
pub mod generation;
pub mod logger;
pub mod manager;
pub mod policy;
pub mod selection;
pub mod service;
pub mod session;
pub mod stats;

pub use analytics::{OwnerAnalytics, OwnerRow, VenueRevenue};
pub use banner::{Banner, BannerKind};
pub use bulk::{BulkAction, BulkDialog, BulkRequest};
pub use config::ConsoleConfig;
pub use console::AdminConsole;
pub use entity::{EntityStatus, Justification, ManagedEntity};
pub use filter::{ApprovalStatus, BookingFilter, NumericRange, VenueFilter};
pub use generation::{Generation, LoadTicket};
pub use manager::{BookingManager, EntityManager, LoadRequest, VenueManager};
pub use policy::{StatusChange, StatusChangeDialog, request_status_change};
pub use selection::Selection;
pub use service::{
    BookingBackend, BookingService, EntityBackend, StatusOf, VenueBackend, VenueService,
};
pub use session::{AccessDenied, Session};
pub use stats::StatusSummary;
