//! Double-booking checks against confirmed bookings.

use crate::db::queries::load_bookings_for_listing_date;
use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::models::booking_status::BookingStatus;
use crate::utils::time::TimeSpan;
use chrono::NaiveDate;
use rusqlite::Connection;

pub trait ConflictChecker {
    /// Confirmed bookings on `listing_id`/`date` whose span overlaps `span`.
    /// `exclude` skips the booking being approved.
    fn find_conflicts(
        &self,
        listing_id: i64,
        date: &NaiveDate,
        span: &TimeSpan,
        exclude: Option<i64>,
    ) -> AppResult<Vec<Booking>>;
}

/// Conflict authority backed by the bookings table. Meant to be used on
/// the same connection (or transaction) that performs the status change.
pub struct SqliteConflictChecker<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteConflictChecker<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl ConflictChecker for SqliteConflictChecker<'_> {
    fn find_conflicts(
        &self,
        listing_id: i64,
        date: &NaiveDate,
        span: &TimeSpan,
        exclude: Option<i64>,
    ) -> AppResult<Vec<Booking>> {
        let confirmed =
            load_bookings_for_listing_date(self.conn, listing_id, date, BookingStatus::Confirmed)?;
        Ok(overlapping(&confirmed, span, exclude))
    }
}

/// Bookings from `candidates` overlapping `span` (half-open, touching
/// spans are fine).
pub fn overlapping(candidates: &[Booking], span: &TimeSpan, exclude: Option<i64>) -> Vec<Booking> {
    candidates
        .iter()
        .filter(|b| Some(b.id) != exclude)
        .filter(|b| b.span.overlaps(span))
        .cloned()
        .collect()
}
