mod common;
use common::{add_listing, day, memory_pool, setup_test_db};

use chrono::NaiveDate;
use parkpulse::core::approval::{ApprovalLogic, ApprovalOutcome};
use parkpulse::core::booking::{BookingLogic, BookingRequest, RequestOutcome};
use parkpulse::core::conflict::ConflictChecker;
use parkpulse::core::listing::{ListingChanges, ListingLogic};
use parkpulse::core::validator::Rejection;
use parkpulse::db::initialize::open_db;
use parkpulse::db::pool::DbPool;
use parkpulse::db::queries::{load_booking, load_bookings};
use parkpulse::errors::{AppError, AppResult};
use parkpulse::models::booking::Booking;
use parkpulse::models::booking_source::BookingSource;
use parkpulse::models::booking_status::BookingStatus;
use parkpulse::models::money::Money;
use parkpulse::utils::time::TimeSpan;
use std::thread;

fn request(pool: &DbPool, listing: i64, from: &str, to: &str, who: &str) -> RequestOutcome {
    BookingLogic::request(
        &pool.conn,
        &BookingRequest {
            listing_id: listing,
            start: from.to_string(),
            end: to.to_string(),
            requester: who.to_string(),
            source: BookingSource::Marketplace,
        },
    )
    .expect("request")
}

fn pending_id(outcome: RequestOutcome) -> i64 {
    match outcome {
        RequestOutcome::Accepted(b) => {
            assert_eq!(b.status, BookingStatus::Pending);
            b.id
        }
        RequestOutcome::Rejected(r) => panic!("unexpected rejection: {:?}", r),
    }
}

#[test]
fn test_request_persists_pending_with_cost() {
    let pool = memory_pool();
    let listing = add_listing(&pool, "09:00", "17:00", "5.00");

    let id = pending_id(request(&pool, listing.id, "09:00", "17:00", "ann@example.com"));

    let stored = load_booking(&pool.conn, id).unwrap();
    assert_eq!(stored.status, BookingStatus::Pending);
    assert_eq!(stored.cost.to_string(), "40.00");
    assert_eq!(stored.date, day("2026-11-02"));
    assert_eq!(stored.span.start.to_string(), "09:00");
    assert_eq!(stored.span.end.to_string(), "17:00");
}

#[test]
fn test_rejected_request_persists_nothing() {
    let pool = memory_pool();
    let listing = add_listing(&pool, "09:00", "17:00", "5.00");

    for (from, to, reason) in [
        ("8:00", "10:00", Rejection::OutsideListingWindow),
        ("10:00", "10:00", Rejection::EndNotAfterStart),
        ("ten", "11:00", Rejection::MalformedTime),
    ] {
        match request(&pool, listing.id, from, to, "ann@example.com") {
            RequestOutcome::Rejected(r) => assert_eq!(r, reason),
            RequestOutcome::Accepted(b) => panic!("accepted {:?}", b),
        }
    }

    assert!(load_bookings(&pool.conn, None, None).unwrap().is_empty());
}

#[test]
fn test_chat_and_marketplace_share_the_same_rules() {
    let pool = memory_pool();
    let listing = add_listing(&pool, "09:00", "17:00", "5.00");

    for source in [BookingSource::Chat, BookingSource::Marketplace] {
        let req = BookingRequest {
            listing_id: listing.id,
            start: "22:00".into(),
            end: "02:00".into(),
            requester: "ann@example.com".into(),
            source,
        };
        match BookingLogic::request(&pool.conn, &req).unwrap() {
            RequestOutcome::Rejected(r) => assert_eq!(r, Rejection::EndNotAfterStart),
            RequestOutcome::Accepted(_) => panic!("overnight accepted via {:?}", source),
        }
    }
}

#[test]
fn test_request_on_unknown_listing_is_an_error() {
    let pool = memory_pool();
    let err = BookingLogic::request(
        &pool.conn,
        &BookingRequest {
            listing_id: 42,
            start: "09:00".into(),
            end: "10:00".into(),
            requester: "ann@example.com".into(),
            source: BookingSource::Chat,
        },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::ListingNotFound(42)));
}

#[test]
fn test_approve_confirms_pending_booking() {
    let mut pool = memory_pool();
    let listing = add_listing(&pool, "09:00", "17:00", "5.00");
    let id = pending_id(request(&pool, listing.id, "10:00", "12:00", "ann@example.com"));

    match ApprovalLogic::approve(&mut pool, id).unwrap() {
        ApprovalOutcome::Confirmed(b) => {
            assert_eq!(b.status, BookingStatus::Confirmed);
            assert_eq!(b.cost.to_string(), "10.00");
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    let stored = load_booking(&pool.conn, id).unwrap();
    assert_eq!(stored.status, BookingStatus::Confirmed);
}

#[test]
fn test_overlapping_approval_is_blocked() {
    let mut pool = memory_pool();
    let listing = add_listing(&pool, "09:00", "17:00", "5.00");

    let first = pending_id(request(&pool, listing.id, "10:00", "12:00", "ann@example.com"));
    let second = pending_id(request(&pool, listing.id, "11:00", "13:00", "bob@example.com"));

    ApprovalLogic::approve(&mut pool, first).unwrap();

    let err = ApprovalLogic::approve(&mut pool, second).unwrap_err();
    match err {
        AppError::BookingConflict { booking, conflicts } => {
            assert_eq!(booking, second);
            assert_eq!(conflicts, vec![first]);
        }
        other => panic!("unexpected error {:?}", other),
    }

    // still pending, nothing half-written
    let stored = load_booking(&pool.conn, second).unwrap();
    assert_eq!(stored.status, BookingStatus::Pending);
}

#[test]
fn test_adjacent_bookings_do_not_conflict() {
    let mut pool = memory_pool();
    let listing = add_listing(&pool, "09:00", "17:00", "5.00");

    let morning = pending_id(request(&pool, listing.id, "09:00", "12:00", "ann@example.com"));
    let afternoon = pending_id(request(&pool, listing.id, "12:00", "17:00", "bob@example.com"));

    ApprovalLogic::approve(&mut pool, morning).unwrap();
    assert!(matches!(
        ApprovalLogic::approve(&mut pool, afternoon).unwrap(),
        ApprovalOutcome::Confirmed(_)
    ));
}

#[test]
fn test_denied_bookings_do_not_block() {
    let mut pool = memory_pool();
    let listing = add_listing(&pool, "09:00", "17:00", "5.00");

    let first = pending_id(request(&pool, listing.id, "10:00", "12:00", "ann@example.com"));
    let second = pending_id(request(&pool, listing.id, "10:00", "12:00", "bob@example.com"));

    ApprovalLogic::deny(&pool.conn, first).unwrap();
    assert!(matches!(
        ApprovalLogic::approve(&mut pool, second).unwrap(),
        ApprovalOutcome::Confirmed(_)
    ));
}

#[test]
fn test_only_pending_can_transition() {
    let mut pool = memory_pool();
    let listing = add_listing(&pool, "09:00", "17:00", "5.00");
    let id = pending_id(request(&pool, listing.id, "10:00", "12:00", "ann@example.com"));

    ApprovalLogic::approve(&mut pool, id).unwrap();

    assert!(matches!(
        ApprovalLogic::approve(&mut pool, id).unwrap_err(),
        AppError::InvalidTransition { .. }
    ));
    assert!(matches!(
        ApprovalLogic::deny(&pool.conn, id).unwrap_err(),
        AppError::InvalidTransition { .. }
    ));
    assert!(matches!(
        ApprovalLogic::deny(&pool.conn, 999).unwrap_err(),
        AppError::BookingNotFound(999)
    ));
}

#[test]
fn test_window_update_invalidates_pending_on_approval() {
    let mut pool = memory_pool();
    let listing = add_listing(&pool, "09:00", "17:00", "5.00");
    let id = pending_id(request(&pool, listing.id, "15:00", "17:00", "ann@example.com"));

    let changes = ListingChanges {
        end: Some("14:00".into()),
        ..Default::default()
    };
    let updated = ListingLogic::update(&pool.conn, listing.id, &changes).unwrap();

    let stale = ListingLogic::stale_pending(&pool.conn, &updated).unwrap();
    assert_eq!(stale.iter().map(|b| b.id).collect::<Vec<_>>(), vec![id]);

    match ApprovalLogic::approve(&mut pool, id).unwrap() {
        ApprovalOutcome::Invalidated(b, reason) => {
            assert_eq!(reason, Rejection::OutsideListingWindow);
            assert_eq!(b.status, BookingStatus::Denied);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(
        load_booking(&pool.conn, id).unwrap().status,
        BookingStatus::Denied
    );
}

#[test]
fn test_date_change_invalidates_pending_on_approval() {
    let mut pool = memory_pool();
    let listing = add_listing(&pool, "09:00", "17:00", "5.00");
    let id = pending_id(request(&pool, listing.id, "10:00", "11:00", "ann@example.com"));

    let changes = ListingChanges {
        date: Some(day("2026-11-03")),
        ..Default::default()
    };
    ListingLogic::update(&pool.conn, listing.id, &changes).unwrap();

    assert!(matches!(
        ApprovalLogic::approve(&mut pool, id).unwrap(),
        ApprovalOutcome::Invalidated(_, Rejection::OutsideListingWindow)
    ));
}

#[test]
fn test_approval_requotes_with_current_rate() {
    let mut pool = memory_pool();
    let listing = add_listing(&pool, "09:00", "17:00", "5.00");
    let id = pending_id(request(&pool, listing.id, "10:00", "12:00", "ann@example.com"));

    let changes = ListingChanges {
        rate: Some(Money::parse_rate("6.25").unwrap()),
        ..Default::default()
    };
    ListingLogic::update(&pool.conn, listing.id, &changes).unwrap();

    match ApprovalLogic::approve(&mut pool, id).unwrap() {
        ApprovalOutcome::Confirmed(b) => assert_eq!(b.cost.to_string(), "12.50"),
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn test_listing_update_rejects_bad_window() {
    let pool = memory_pool();
    let listing = add_listing(&pool, "09:00", "17:00", "5.00");

    let changes = ListingChanges {
        start: Some("18:00".into()),
        ..Default::default()
    };
    assert!(matches!(
        ListingLogic::update(&pool.conn, listing.id, &changes).unwrap_err(),
        AppError::Rejected(Rejection::EndNotAfterStart)
    ));
}

/// Authority that reports every span as taken.
struct AlwaysBusy;

impl ConflictChecker for AlwaysBusy {
    fn find_conflicts(
        &self,
        _listing_id: i64,
        _date: &NaiveDate,
        _span: &TimeSpan,
        _exclude: Option<i64>,
    ) -> AppResult<Vec<Booking>> {
        let taken = Booking::pending(
            1,
            "someone@example.com",
            NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            TimeSpan::parse("00:00", "23:59").unwrap(),
            Money::ZERO,
            BookingSource::Chat,
        );
        Ok(vec![Booking { id: 77, ..taken }])
    }
}

#[test]
fn test_approval_defers_to_conflict_authority() {
    let pool = memory_pool();
    let listing = add_listing(&pool, "09:00", "17:00", "5.00");
    let id = pending_id(request(&pool, listing.id, "10:00", "12:00", "ann@example.com"));

    let err = ApprovalLogic::approve_with(&pool.conn, id, &AlwaysBusy).unwrap_err();
    assert!(matches!(
        err,
        AppError::BookingConflict { ref conflicts, .. } if conflicts == &vec![77]
    ));
    assert_eq!(
        load_booking(&pool.conn, id).unwrap().status,
        BookingStatus::Pending
    );
}

#[test]
fn test_concurrent_approvals_confirm_at_most_one() {
    for round in 0..10 {
        let db_path = setup_test_db(&format!("approval_race_{}", round));

        let setup = open_db(&db_path).expect("open db");
        let listing = add_listing(&setup, "09:00", "17:00", "5.00");
        let first = pending_id(request(&setup, listing.id, "10:00", "12:00", "ann@example.com"));
        let second = pending_id(request(&setup, listing.id, "11:00", "13:00", "bob@example.com"));
        drop(setup);

        // one connection per approver, as two CLI processes would have
        let handles: Vec<_> = [first, second]
            .into_iter()
            .map(|id| {
                let mut pool = open_db(&db_path).expect("open db");
                thread::spawn(move || ApprovalLogic::approve(&mut pool, id))
            })
            .collect();

        let results: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("approver thread"))
            .collect();

        let confirmed_calls = results
            .iter()
            .filter(|r| matches!(r, Ok(ApprovalOutcome::Confirmed(_))))
            .count();
        assert_eq!(confirmed_calls, 1, "round {}: {:?}", round, results);
        assert!(
            results
                .iter()
                .any(|r| matches!(r, Err(AppError::BookingConflict { .. }))),
            "round {}: {:?}",
            round,
            results
        );

        let pool = open_db(&db_path).expect("open db");
        let confirmed = load_bookings(&pool.conn, None, Some(BookingStatus::Confirmed)).unwrap();
        assert_eq!(confirmed.len(), 1, "round {}", round);
    }
}
