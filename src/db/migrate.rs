use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. It also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Base marketplace schema: listings and bookings.
fn create_marketplace_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS listings (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            owner       TEXT NOT NULL,
            address     TEXT NOT NULL,
            date        TEXT NOT NULL,
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            rate_cents  INTEGER NOT NULL CHECK(rate_cents > 0),
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS bookings (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            listing_id  INTEGER NOT NULL REFERENCES listings(id) ON DELETE CASCADE,
            requester   TEXT NOT NULL,
            date        TEXT NOT NULL,
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            cost_cents  INTEGER NOT NULL CHECK(cost_cents >= 0),
            status      TEXT NOT NULL DEFAULT 'pending'
                        CHECK(status IN ('pending','confirmed','denied')),
            source      TEXT NOT NULL DEFAULT 'marketplace'
                        CHECK(source IN ('chat','marketplace')),
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_listings_date ON listings(date);
        "#,
    )?;
    Ok(())
}

/// Conflict lookups filter on listing, date and status together.
fn add_booking_lookup_index(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_listing_date_status
            ON bookings(listing_id, date, status);
        "#,
    )?;
    Ok(())
}

type Migration = (&'static str, &'static str, fn(&Connection) -> Result<()>);

const MIGRATIONS: &[Migration] = &[
    (
        "20260901_0001_create_marketplace_schema",
        "Created listings and bookings tables",
        create_marketplace_tables,
    ),
    (
        "20260915_0002_add_booking_lookup_index",
        "Added (listing_id, date, status) index on bookings",
        add_booking_lookup_index,
    ),
];

/// Public entry point: run all pending migrations.
/// Returns how many were applied in this call.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        apply(conn)?;
        mark_applied(conn, version, message)?;
        success(format!("Migration applied: {} → {}", version, message));
        applied += 1;
    }

    Ok(applied)
}
