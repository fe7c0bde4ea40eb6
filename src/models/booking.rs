use super::{booking_source::BookingSource, booking_status::BookingStatus, money::Money};
use crate::utils::time::TimeSpan;
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: i64,
    pub listing_id: i64,           // ⇔ bookings.listing_id
    pub requester: String,         // ⇔ bookings.requester
    pub date: NaiveDate,           // ⇔ bookings.date (copied from the listing)
    pub span: TimeSpan,            // ⇔ bookings.start_time / end_time
    pub cost: Money,               // ⇔ bookings.cost_cents
    pub status: BookingStatus,     // ⇔ bookings.status
    pub source: BookingSource,     // ⇔ bookings.source
    pub created_at: String,        // ⇔ bookings.created_at (TEXT, ISO8601)
}

impl Booking {
    /// A freshly accepted request: always `pending`, `id = 0` until inserted.
    pub fn pending(
        listing_id: i64,
        requester: &str,
        date: NaiveDate,
        span: TimeSpan,
        cost: Money,
        source: BookingSource,
    ) -> Self {
        Self {
            id: 0,
            listing_id,
            requester: requester.to_string(),
            date,
            span,
            cost,
            status: BookingStatus::Pending,
            source,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
