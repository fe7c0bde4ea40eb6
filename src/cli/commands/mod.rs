pub mod approve;
pub mod book;
pub mod bookings;
pub mod config;
pub mod db;
pub mod init;
pub mod listing;
pub mod log;
pub mod quote;
pub mod search;
