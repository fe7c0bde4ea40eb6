//! Owner-side approval of pending bookings.
//!
//! Approval is the authoritative step: it re-validates the request against
//! the listing as it is *now* (the owner may have changed the window or the
//! date since the request was made) and asks the conflict checker about
//! confirmed bookings, all inside one write transaction.

use crate::core::calculator::calculate_cost;
use crate::core::conflict::{ConflictChecker, SqliteConflictChecker};
use crate::core::validator::{Rejection, ValidationResult, validate_against_listing};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{load_booking, load_listing, update_booking_status};
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::booking_status::BookingStatus;
use rusqlite::Connection;

#[derive(Debug, Clone)]
pub enum ApprovalOutcome {
    Confirmed(Booking),
    /// The request no longer fits the listing; it has been denied.
    Invalidated(Booking, Rejection),
}

pub struct ApprovalLogic;

fn ensure_pending(booking: &Booking, action: &'static str) -> AppResult<()> {
    if !booking.status.is_pending() {
        return Err(AppError::InvalidTransition {
            id: booking.id,
            status: booking.status.to_string(),
            action,
        });
    }
    Ok(())
}

impl ApprovalLogic {
    /// Approve using the bookings table as conflict authority.
    pub fn approve(pool: &mut DbPool, booking_id: i64) -> AppResult<ApprovalOutcome> {
        let result = pool.with_write_tx(|tx| {
            let checker = SqliteConflictChecker::new(tx);
            Self::approve_with(tx, booking_id, &checker)
        });

        // Written outside the rolled-back transaction.
        if let Err(AppError::BookingConflict { booking, conflicts }) = &result {
            ttlog_soft(
                &pool.conn,
                "booking_conflict",
                &format!("booking:{}", booking),
                &format!("Approval blocked by confirmed booking(s) {:?}", conflicts),
            );
        }

        result
    }

    /// Approval flow with an explicit conflict authority.
    pub fn approve_with(
        conn: &Connection,
        booking_id: i64,
        checker: &dyn ConflictChecker,
    ) -> AppResult<ApprovalOutcome> {
        let mut booking = load_booking(conn, booking_id)?;
        ensure_pending(&booking, "approved")?;

        let listing = load_listing(conn, booking.listing_id)?;

        let verdict = if listing.date != booking.date {
            ValidationResult::Rejected(Rejection::OutsideListingWindow)
        } else {
            validate_against_listing(
                &booking.span.start.to_string(),
                &booking.span.end.to_string(),
                &listing,
            )
        };

        let span = match verdict {
            ValidationResult::Accepted(span) => span,
            ValidationResult::Rejected(reason) => {
                update_booking_status(conn, booking.id, BookingStatus::Denied, booking.cost)?;
                booking.status = BookingStatus::Denied;
                ttlog_soft(
                    conn,
                    "booking_invalidated",
                    &format!("booking:{}", booking.id),
                    &format!(
                        "Listing {} changed since the request: {}",
                        listing.id,
                        reason.code()
                    ),
                );
                return Ok(ApprovalOutcome::Invalidated(booking, reason));
            }
        };

        let conflicts = checker.find_conflicts(listing.id, &booking.date, &span, Some(booking.id))?;
        if !conflicts.is_empty() {
            return Err(AppError::BookingConflict {
                booking: booking.id,
                conflicts: conflicts.iter().map(|b| b.id).collect(),
            });
        }

        // Re-quote with the current rate: the confirmed record carries the
        // price the owner actually accepted.
        let cost = calculate_cost(listing.rate, &span);
        update_booking_status(conn, booking.id, BookingStatus::Confirmed, cost)?;
        booking.status = BookingStatus::Confirmed;
        booking.cost = cost;

        ttlog_soft(
            conn,
            "booking_confirmed",
            &format!("booking:{}", booking.id),
            &format!(
                "Listing {} on {} {} confirmed for {} ({})",
                listing.id,
                booking.date_str(),
                booking.span,
                booking.requester,
                booking.cost
            ),
        );

        Ok(ApprovalOutcome::Confirmed(booking))
    }

    pub fn deny(conn: &Connection, booking_id: i64) -> AppResult<Booking> {
        let mut booking = load_booking(conn, booking_id)?;
        ensure_pending(&booking, "denied")?;

        update_booking_status(conn, booking.id, BookingStatus::Denied, booking.cost)?;
        booking.status = BookingStatus::Denied;

        ttlog_soft(
            conn,
            "booking_denied",
            &format!("booking:{}", booking.id),
            &format!("Owner denied {}'s request", booking.requester),
        );

        Ok(booking)
    }
}
