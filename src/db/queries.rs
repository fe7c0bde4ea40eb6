use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::booking_source::BookingSource;
use crate::models::booking_status::BookingStatus;
use crate::models::listing::Listing;
use crate::models::money::Money;
use crate::utils::time::{TimeSpan, parse_time_of_day};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

fn parse_row_date(col: usize, s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| conversion_error(col, AppError::InvalidDate(s.to_string())))
}

// ---------------------------
// Listings
// ---------------------------

const LISTING_COLUMNS: &str =
    "id, owner, address, date, start_time, end_time, rate_cents, created_at";

/// Listing times stay raw text: a corrupt window must surface as a
/// validation rejection, not as a load failure.
pub fn map_listing(row: &Row) -> Result<Listing> {
    let date_str: String = row.get("date")?;
    let date = parse_row_date(3, &date_str)?;

    Ok(Listing {
        id: row.get("id")?,
        owner: row.get("owner")?,
        address: row.get("address")?,
        date,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        rate: Money::from_cents(row.get("rate_cents")?),
        created_at: row.get("created_at")?,
    })
}

pub fn insert_listing(conn: &Connection, l: &Listing) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO listings (owner, address, date, start_time, end_time, rate_cents, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            l.owner,
            l.address,
            l.date_str(),
            l.start_time,
            l.end_time,
            l.rate.cents(),
            l.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update everything except id / owner / created_at.
pub fn update_listing(conn: &Connection, l: &Listing) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE listings
         SET address = ?1, date = ?2, start_time = ?3, end_time = ?4, rate_cents = ?5
         WHERE id = ?6",
        params![
            l.address,
            l.date_str(),
            l.start_time,
            l.end_time,
            l.rate.cents(),
            l.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::ListingNotFound(l.id));
    }
    Ok(())
}

pub fn find_listing(conn: &Connection, id: i64) -> AppResult<Option<Listing>> {
    let sql = format!("SELECT {LISTING_COLUMNS} FROM listings WHERE id = ?1");
    let listing = conn.query_row(&sql, [id], map_listing).optional()?;
    Ok(listing)
}

pub fn load_listing(conn: &Connection, id: i64) -> AppResult<Listing> {
    find_listing(conn, id)?.ok_or(AppError::ListingNotFound(id))
}

pub fn load_listings(conn: &Connection, date: Option<&NaiveDate>) -> AppResult<Vec<Listing>> {
    let mut out = Vec::new();

    match date {
        Some(d) => {
            let sql = format!(
                "SELECT {LISTING_COLUMNS} FROM listings WHERE date = ?1 ORDER BY start_time, id"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([d.format("%Y-%m-%d").to_string()], map_listing)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let sql = format!("SELECT {LISTING_COLUMNS} FROM listings ORDER BY date, start_time, id");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], map_listing)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

// ---------------------------
// Bookings
// ---------------------------

const BOOKING_COLUMNS: &str =
    "id, listing_id, requester, date, start_time, end_time, cost_cents, status, source, created_at";

pub fn map_booking(row: &Row) -> Result<Booking> {
    let date_str: String = row.get("date")?;
    let date = parse_row_date(3, &date_str)?;

    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;
    let start = parse_time_of_day(&start_str)
        .ok_or_else(|| conversion_error(4, AppError::InvalidTime(start_str.clone())))?;
    let end = parse_time_of_day(&end_str)
        .ok_or_else(|| conversion_error(5, AppError::InvalidTime(end_str.clone())))?;

    let status_str: String = row.get("status")?;
    let status = BookingStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(7, AppError::InvalidStatus(status_str.clone())))?;

    let source_str: String = row.get("source")?;
    let source = BookingSource::from_db_str(&source_str)
        .ok_or_else(|| conversion_error(8, AppError::InvalidSource(source_str.clone())))?;

    Ok(Booking {
        id: row.get("id")?,
        listing_id: row.get("listing_id")?,
        requester: row.get("requester")?,
        date,
        span: TimeSpan::new(start, end),
        cost: Money::from_cents(row.get("cost_cents")?),
        status,
        source,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_booking(conn: &Connection, b: &Booking) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO bookings (listing_id, requester, date, start_time, end_time,
                               cost_cents, status, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            b.listing_id,
            b.requester,
            b.date_str(),
            b.span.start.to_string(),
            b.span.end.to_string(),
            b.cost.cents(),
            b.status.to_db_str(),
            b.source.to_db_str(),
            b.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_booking(conn: &Connection, id: i64) -> AppResult<Option<Booking>> {
    let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?1");
    let booking = conn.query_row(&sql, [id], map_booking).optional()?;
    Ok(booking)
}

pub fn load_booking(conn: &Connection, id: i64) -> AppResult<Booking> {
    find_booking(conn, id)?.ok_or(AppError::BookingNotFound(id))
}

/// Persist a status transition together with the (possibly re-quoted) cost.
pub fn update_booking_status(
    conn: &Connection,
    id: i64,
    status: BookingStatus,
    cost: Money,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE bookings SET status = ?1, cost_cents = ?2 WHERE id = ?3",
        params![status.to_db_str(), cost.cents(), id],
    )?;

    if changed == 0 {
        return Err(AppError::BookingNotFound(id));
    }
    Ok(())
}

/// Bookings for a listing on a date with the given status, by start time.
pub fn load_bookings_for_listing_date(
    conn: &Connection,
    listing_id: i64,
    date: &NaiveDate,
    status: BookingStatus,
) -> AppResult<Vec<Booking>> {
    let sql = format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings
         WHERE listing_id = ?1 AND date = ?2 AND status = ?3
         ORDER BY start_time, id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![
            listing_id,
            date.format("%Y-%m-%d").to_string(),
            status.to_db_str()
        ],
        map_booking,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Optional filters, ordered by date then start time.
pub fn load_bookings(
    conn: &Connection,
    listing_id: Option<i64>,
    status: Option<BookingStatus>,
) -> AppResult<Vec<Booking>> {
    let sql = format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings
         WHERE (?1 IS NULL OR listing_id = ?1)
           AND (?2 IS NULL OR status = ?2)
         ORDER BY date, start_time, id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![listing_id, status.map(|s| s.to_db_str())],
        map_booking,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
