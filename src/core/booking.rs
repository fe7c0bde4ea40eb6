use crate::core::calculator::calculate_cost;
use crate::core::validator::{Rejection, ValidationResult, validate_against_listing};
use crate::db::log::ttlog_soft;
use crate::db::queries::{insert_booking, load_listing};
use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::models::booking_source::BookingSource;
use crate::models::listing::Listing;
use crate::models::money::Money;
use crate::utils::time::TimeSpan;
use rusqlite::Connection;

/// What a renter typed, before validation.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub listing_id: i64,
    pub start: String,
    pub end: String,
    pub requester: String,
    pub source: BookingSource,
}

/// Priced, validated span on a listing. Nothing persisted.
#[derive(Debug, Clone)]
pub struct Quote {
    pub listing: Listing,
    pub span: TimeSpan,
    pub cost: Money,
}

#[derive(Debug, Clone)]
pub enum QuoteOutcome {
    Accepted(Quote),
    Rejected(Rejection),
}

#[derive(Debug, Clone)]
pub enum RequestOutcome {
    Accepted(Booking),
    Rejected(Rejection),
}

/// High-level business logic for booking requests. Chat and marketplace
/// requests both end up here.
pub struct BookingLogic;

impl BookingLogic {
    /// Validate and price against an already-loaded listing.
    pub fn quote_listing(listing: Listing, start: &str, end: &str) -> QuoteOutcome {
        match validate_against_listing(start, end, &listing) {
            ValidationResult::Accepted(span) => {
                let cost = calculate_cost(listing.rate, &span);
                QuoteOutcome::Accepted(Quote {
                    listing,
                    span,
                    cost,
                })
            }
            ValidationResult::Rejected(reason) => QuoteOutcome::Rejected(reason),
        }
    }

    /// Live cost display for a listing.
    pub fn quote(conn: &Connection, listing_id: i64, start: &str, end: &str) -> AppResult<QuoteOutcome> {
        let listing = load_listing(conn, listing_id)?;
        Ok(Self::quote_listing(listing, start, end))
    }

    /// Validate, price and persist a `pending` booking.
    /// A rejected request writes nothing to the bookings table.
    pub fn request(conn: &Connection, req: &BookingRequest) -> AppResult<RequestOutcome> {
        let quote = match Self::quote(conn, req.listing_id, &req.start, &req.end)? {
            QuoteOutcome::Accepted(q) => q,
            QuoteOutcome::Rejected(reason) => {
                ttlog_soft(
                    conn,
                    "booking_rejected",
                    &format!("listing:{}", req.listing_id),
                    &format!(
                        "{} {}-{} via {}: {}",
                        req.requester,
                        req.start,
                        req.end,
                        req.source.to_db_str(),
                        reason.code()
                    ),
                );
                return Ok(RequestOutcome::Rejected(reason));
            }
        };

        let mut booking = Booking::pending(
            quote.listing.id,
            &req.requester,
            quote.listing.date,
            quote.span,
            quote.cost,
            req.source,
        );
        booking.id = insert_booking(conn, &booking)?;

        ttlog_soft(
            conn,
            "booking_requested",
            &format!("booking:{}", booking.id),
            &format!(
                "{} requested listing {} on {} {} for {} via {}",
                booking.requester,
                booking.listing_id,
                booking.date_str(),
                booking.span,
                booking.cost,
                booking.source.to_db_str()
            ),
        );

        Ok(RequestOutcome::Accepted(booking))
    }
}
