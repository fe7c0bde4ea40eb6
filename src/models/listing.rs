use super::money::Money;
use crate::utils::time::TimeSpan;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// A driveway advertised for one date and time window.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub id: i64,
    pub owner: String,        // ⇔ listings.owner (email / identity)
    pub address: String,      // ⇔ listings.address
    pub date: NaiveDate,      // ⇔ listings.date (TEXT "YYYY-MM-DD")
    pub start_time: String,   // ⇔ listings.start_time (TEXT "HH:MM")
    pub end_time: String,     // ⇔ listings.end_time (TEXT "HH:MM")
    pub rate: Money,          // ⇔ listings.rate_cents (INT)
    pub created_at: String,   // ⇔ listings.created_at (TEXT, ISO8601)
}

impl Listing {
    /// Builder for listings created from the CLI (`id = 0` until inserted).
    pub fn new(
        owner: &str,
        address: &str,
        date: NaiveDate,
        window: TimeSpan,
        rate: Money,
    ) -> Self {
        Self {
            id: 0,
            owner: owner.to_string(),
            address: address.to_string(),
            date,
            start_time: window.start.to_string(),
            end_time: window.end.to_string(),
            rate,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Advertised window, `None` if the stored times are unreadable.
    pub fn window(&self) -> Option<TimeSpan> {
        TimeSpan::parse(&self.start_time, &self.end_time)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
