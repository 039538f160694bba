// admin-console/tests/booking_screen.rs
// Booking screen and the combined console

mod support;

use admin_console::{
    AdminConsole, BannerKind, BookingBackend, BookingFilter, BookingManager, BulkAction,
    NumericRange, Session,
};
use shared::error::ErrorCode;
use shared::models::{BookingStatus, Role, VenueStatus};
use support::{BookingCall, FakeBookings, FakeVenues, booking, venue};

fn bookings() -> Vec<shared::models::Booking> {
    vec![
        booking(1, 1, BookingStatus::Pending, 400.0),
        booking(2, 1, BookingStatus::Confirmed, 1200.0),
        booking(3, 2, BookingStatus::Completed, 800.0),
        booking(4, 3, BookingStatus::Disputed, 250.0),
    ]
}

async fn loaded() -> BookingManager<FakeBookings> {
    let backend = BookingBackend::new(FakeBookings::with(bookings()));
    let mut manager = BookingManager::new(Session::admin("ops"), backend).unwrap();
    manager.reload().await.unwrap();
    manager
}

fn fake(manager: &BookingManager<FakeBookings>) -> &FakeBookings {
    manager.backend().service()
}

#[tokio::test]
async fn test_booking_stats() {
    let manager = loaded().await;
    assert_eq!(manager.summary().total, 4);
    assert_eq!(manager.summary().count(BookingStatus::Disputed), 1);
    assert_eq!(manager.summary().amount, 2650.0);
    assert_eq!(
        manager.server_stats().unwrap().count(BookingStatus::Confirmed),
        1
    );
}

#[tokio::test]
async fn test_cancel_requires_note() {
    let mut manager = loaded().await;
    let mut dialog = manager
        .request_status_change(2, BookingStatus::Cancelled)
        .unwrap();
    dialog.set_reason("not a booking field");
    let err = manager.submit_status_change(dialog).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::BookingNoteRequired);
    assert!(fake(&manager).mutation_calls().is_empty());

    let mut dialog = manager
        .request_status_change(2, BookingStatus::Cancelled)
        .unwrap();
    dialog.set_notes("customer cancelled by phone");
    manager.submit_status_change(dialog).await.unwrap();
    assert_eq!(
        fake(&manager).mutation_calls(),
        vec![BookingCall::Update {
            id: 2,
            status: BookingStatus::Cancelled,
            notes: Some("customer cancelled by phone".to_string()),
        }]
    );
    assert_eq!(manager.summary().count(BookingStatus::Cancelled), 1);
}

#[tokio::test]
async fn test_unknown_row_is_not_found() {
    let manager = loaded().await;
    let err = manager
        .request_status_change(99, BookingStatus::Confirmed)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[tokio::test]
async fn test_bulk_confirm_over_filtered_rows() {
    let mut manager = loaded().await;
    manager.set_filter(BookingFilter {
        amount: NumericRange::at_most(500.0),
        ..Default::default()
    });
    manager.select_all();
    assert_eq!(manager.selection().ids(), vec![1, 4]);

    let dialog = manager
        .begin_bulk(BulkAction::SetStatus(BookingStatus::Confirmed))
        .unwrap();
    manager.submit_bulk(dialog).await.unwrap();
    assert_eq!(
        fake(&manager).mutation_calls(),
        vec![BookingCall::BulkUpdate {
            ids: vec![1, 4],
            status: BookingStatus::Confirmed,
            notes: None,
        }]
    );
    assert!(manager.selection().is_empty());
    assert_eq!(manager.summary().count(BookingStatus::Confirmed), 3);
}

#[tokio::test]
async fn test_bulk_failure_preserves_selection() {
    let mut manager = loaded().await;
    fake(&manager).fail_mutations(Some("Dispute window closed"));
    manager.toggle_selection(4);

    let mut dialog = manager
        .begin_bulk(BulkAction::SetStatus(BookingStatus::Cancelled))
        .unwrap();
    dialog.set_notes("refund issued");
    let err = manager.submit_bulk(dialog).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::BookingUpdateFailed);
    assert_eq!(manager.selection().ids(), vec![4]);
    assert_eq!(manager.banner().unwrap().kind, BannerKind::Mutation);
    assert_eq!(manager.summary().count(BookingStatus::Disputed), 1);

    manager.dismiss_banner();
    assert!(manager.banner().is_none());
}

#[tokio::test]
async fn test_bookings_cannot_be_deleted() {
    let mut manager = loaded().await;
    assert!(!manager.bulk_actions().contains(&BulkAction::Delete));

    manager.toggle_selection(1);
    let err = manager.begin_bulk(BulkAction::Delete).unwrap_err();
    assert_eq!(err.code, ErrorCode::Unsupported);

    let err = manager.delete(1).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::Unsupported);
    assert!(fake(&manager).mutation_calls().is_empty());
    // refused up front: no banner, no reload
    assert!(manager.banner().is_none());
    assert_eq!(fake(&manager).calls().len(), 2);
}

// ========== Console ==========

#[tokio::test]
async fn test_console_requires_admin() {
    let session = Session::new("o-1", "Owner", Role::Owner);
    let denied = AdminConsole::open(session, FakeVenues::default(), FakeBookings::default());
    assert!(denied.is_err());
}

#[tokio::test]
async fn test_console_refresh_and_owner_analytics() {
    let venues = vec![
        venue(1, 60, 100.0, VenueStatus::Active),
        venue(2, 90, 200.0, VenueStatus::Suspended),
        venue(3, 120, 150.0, VenueStatus::Active),
    ];
    let mut console = AdminConsole::open(
        Session::admin("ops"),
        FakeVenues::with(venues),
        FakeBookings::with(bookings()),
    )
    .unwrap();
    console.refresh_all().await.unwrap();
    assert!(console.banners().is_empty());

    // venue fixtures: odd ids belong to owner 101, even ids to owner 100
    let analytics = console.owner_analytics(101);
    assert_eq!(analytics.venue_count, 2);
    assert_eq!(analytics.active_venues, 2);
    assert_eq!(analytics.venue_revenue, 2500.0);
    assert_eq!(analytics.bookings.total, 3);
    assert_eq!(analytics.booking_revenue, 1200.0);

    let leaderboard = console.owner_leaderboard(5);
    assert_eq!(leaderboard[0].owner_id, 101);
    assert_eq!(leaderboard[1].owner_id, 100);
}

#[tokio::test]
async fn test_console_surfaces_load_banner() {
    let fake_venues = FakeVenues::default();
    fake_venues.fail_list(Some("timeout"));
    let mut console =
        AdminConsole::open(Session::admin("ops"), fake_venues, FakeBookings::default()).unwrap();

    assert!(console.refresh_all().await.is_err());
    let banners = console.banners();
    assert_eq!(banners.len(), 1);
    assert!(banners[0].is_retryable());
    // bookings still loaded
    assert!(console.bookings().server_stats().is_some());
}
