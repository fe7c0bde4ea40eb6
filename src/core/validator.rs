//! Booking window validation shared by every booking entry point
//! (chat assistant, marketplace card, owner approval).
//!
//! Checks run in a fixed order so the user always sees the most basic
//! problem first: format, then ordering, then availability.

use crate::models::listing::Listing;
use crate::utils::time::{TimeOfDay, TimeSpan, parse_time_of_day};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rejection {
    MalformedTime,
    EndNotAfterStart,
    OutsideListingWindow,
}

impl Rejection {
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::MalformedTime => "malformed_time",
            Rejection::EndNotAfterStart => "end_not_after_start",
            Rejection::OutsideListingWindow => "outside_listing_window",
        }
    }

    /// Message shown to the renter.
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::MalformedTime => "Times must use the 24h HH:MM format, e.g. 09:30.",
            Rejection::EndNotAfterStart => {
                "The end time must be later than the start time on the same day."
            }
            Rejection::OutsideListingWindow => {
                "The requested time is outside the hours this driveway is available."
            }
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationResult {
    Accepted(TimeSpan),
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }
}

/// Validate a requested `start_text`/`end_text` against an advertised window.
///
/// Overnight requests (`end <= start`) are rejected, never wrapped to the
/// next day.
pub fn validate_booking_window(
    start_text: &str,
    end_text: &str,
    listing_window: &TimeSpan,
) -> ValidationResult {
    let (Some(start), Some(end)) = (parse_time_of_day(start_text), parse_time_of_day(end_text))
    else {
        return ValidationResult::Rejected(Rejection::MalformedTime);
    };

    if start >= end {
        return ValidationResult::Rejected(Rejection::EndNotAfterStart);
    }

    let requested = TimeSpan::new(start, end);
    if !requested.within(listing_window) {
        return ValidationResult::Rejected(Rejection::OutsideListingWindow);
    }

    ValidationResult::Accepted(requested)
}

/// Same as [`validate_booking_window`] but reads the window from a stored
/// listing. A listing whose own window is unreadable or not ordered
/// rejects every request as `MalformedTime`.
pub fn validate_against_listing(
    start_text: &str,
    end_text: &str,
    listing: &Listing,
) -> ValidationResult {
    match listing.window() {
        Some(window) if window.is_ordered() => {
            validate_booking_window(start_text, end_text, &window)
        }
        _ => ValidationResult::Rejected(Rejection::MalformedTime),
    }
}

/// Validate an owner-supplied availability window (listing add/update).
/// The window obeys the same rules as a booking against a full day.
pub fn validate_listing_window(start_text: &str, end_text: &str) -> ValidationResult {
    let full_day = TimeSpan::new(TimeOfDay::MIDNIGHT, TimeOfDay::LAST_MINUTE);
    validate_booking_window(start_text, end_text, &full_day)
}
