pub mod booking;
pub mod booking_source;
pub mod booking_status;
pub mod listing;
pub mod money;
