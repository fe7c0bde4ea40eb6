//! Message composition for booking notifications.
//!
//! Dispatch (mail client, push, ...) happens outside this crate; nothing
//! here can influence booking state.

use crate::models::booking::Booking;
use crate::models::listing::Listing;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "To: {}", self.to)?;
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(f)?;
        write!(f, "{}", self.body)
    }
}

/// Sent to the owner when a renter asks for a slot.
pub fn compose_request_notice(listing: &Listing, booking: &Booking, currency: &str) -> Notice {
    Notice {
        to: listing.owner.clone(),
        subject: format!("New parking request for {}", listing.address),
        body: format!(
            "{} would like to park at {} on {} from {} to {}.\n\
             Estimated total: {}{}\n\
             Booking reference: #{}\n",
            booking.requester,
            listing.address,
            booking.date_str(),
            booking.span.start,
            booking.span.end,
            currency,
            booking.cost,
            booking.id
        ),
    }
}

/// Sent to the renter once the owner confirmed.
pub fn compose_confirmation_notice(listing: &Listing, booking: &Booking, currency: &str) -> Notice {
    Notice {
        to: booking.requester.clone(),
        subject: format!("Your parking at {} is confirmed", listing.address),
        body: format!(
            "Good news! Your booking #{} at {} on {} from {} to {} is confirmed.\n\
             Total: {}{}\n\
             Owner contact: {}\n",
            booking.id,
            listing.address,
            booking.date_str(),
            booking.span.start,
            booking.span.end,
            currency,
            booking.cost,
            listing.owner
        ),
    }
}
