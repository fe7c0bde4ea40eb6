use crate::core::validator::{ValidationResult, validate_against_listing, validate_listing_window};
use crate::db::log::ttlog_soft;
use crate::db::queries::{insert_listing, load_bookings, load_listing, update_listing};
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::booking_status::BookingStatus;
use crate::models::listing::Listing;
use crate::models::money::Money;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Optional edits for `listing update`. `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct ListingChanges {
    pub address: Option<String>,
    pub date: Option<NaiveDate>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub rate: Option<Money>,
}

pub struct ListingLogic;

impl ListingLogic {
    pub fn add(
        conn: &Connection,
        owner: &str,
        address: &str,
        date: NaiveDate,
        start: &str,
        end: &str,
        rate: Money,
    ) -> AppResult<Listing> {
        if !rate.is_positive() {
            return Err(AppError::InvalidRate(rate.to_string()));
        }

        let window = match validate_listing_window(start, end) {
            ValidationResult::Accepted(span) => span,
            ValidationResult::Rejected(reason) => return Err(AppError::Rejected(reason)),
        };

        let mut listing = Listing::new(owner, address, date, window, rate);
        listing.id = insert_listing(conn, &listing)?;

        ttlog_soft(
            conn,
            "listing_added",
            &format!("listing:{}", listing.id),
            &format!(
                "{} listed {} on {} {} at {}/h",
                listing.owner,
                listing.address,
                listing.date_str(),
                window,
                listing.rate
            ),
        );

        Ok(listing)
    }

    /// Apply `changes`. Pending bookings are left alone: approval checks
    /// them against whatever the listing says at that point.
    pub fn update(conn: &Connection, id: i64, changes: &ListingChanges) -> AppResult<Listing> {
        let mut listing = load_listing(conn, id)?;

        if let Some(address) = &changes.address {
            listing.address = address.clone();
        }
        if let Some(date) = changes.date {
            listing.date = date;
        }
        if let Some(rate) = changes.rate {
            if !rate.is_positive() {
                return Err(AppError::InvalidRate(rate.to_string()));
            }
            listing.rate = rate;
        }

        let start = changes.start.as_deref().unwrap_or(&listing.start_time);
        let end = changes.end.as_deref().unwrap_or(&listing.end_time);
        let window = match validate_listing_window(start, end) {
            ValidationResult::Accepted(span) => span,
            ValidationResult::Rejected(reason) => return Err(AppError::Rejected(reason)),
        };
        listing.start_time = window.start.to_string();
        listing.end_time = window.end.to_string();

        update_listing(conn, &listing)?;

        ttlog_soft(
            conn,
            "listing_updated",
            &format!("listing:{}", listing.id),
            &format!(
                "{} on {} {} at {}/h",
                listing.address,
                listing.date_str(),
                window,
                listing.rate
            ),
        );

        Ok(listing)
    }

    /// Pending bookings that would no longer pass validation against the
    /// listing as stored now.
    pub fn stale_pending(conn: &Connection, listing: &Listing) -> AppResult<Vec<Booking>> {
        let pending = load_bookings(conn, Some(listing.id), Some(BookingStatus::Pending))?;
        Ok(pending
            .into_iter()
            .filter(|b| {
                b.date != listing.date
                    || !validate_against_listing(
                        &b.span.start.to_string(),
                        &b.span.end.to_string(),
                        listing,
                    )
                    .is_accepted()
            })
            .collect())
    }
}
