//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Booking window rejections are NOT errors: they are returned as
//! `ValidationResult::Rejected` so callers can pick the user message.
//! `AppError::Rejected` only wraps one when a command has to stop.

use crate::core::validator::Rejection;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid hourly rate: {0}")]
    InvalidRate(String),

    #[error("Invalid booking status: {0}")]
    InvalidStatus(String),

    #[error("Invalid booking source: {0}")]
    InvalidSource(String),

    // ---------------------------
    // Marketplace logic errors
    // ---------------------------
    #[error("Listing #{0} not found")]
    ListingNotFound(i64),

    #[error("Booking #{0} not found")]
    BookingNotFound(i64),

    #[error("Booking rejected: {0}")]
    Rejected(Rejection),

    #[error("Booking #{booking} conflicts with confirmed booking(s) {conflicts:?}")]
    BookingConflict { booking: i64, conflicts: Vec<i64> },

    #[error("Booking #{id} is {status}, only pending bookings can be {action}")]
    InvalidTransition {
        id: i64,
        status: String,
        action: &'static str,
    },

    // ---------------------------
    // Assistant errors
    // ---------------------------
    #[error("Text generation failed: {0}")]
    Generation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
