use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) LISTINGS
    //
    let listings: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM listings", [], |row| row.get(0))?;
    println!("{}• Listings:{} {}{}{}", CYAN, RESET, GREEN, listings, RESET);

    //
    // 3) BOOKINGS PER STATUS
    //
    println!("{}• Bookings:{}", CYAN, RESET);
    let mut stmt = pool.conn.prepare(
        "SELECT status, COUNT(*) FROM bookings GROUP BY status ORDER BY status",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;
    let mut any = false;
    for r in rows {
        let (status, count) = r?;
        println!("    {:<10} {}", status, count);
        any = true;
    }
    if !any {
        println!("    {GREY}--{RESET}");
    }

    //
    // 4) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row("SELECT MIN(date) FROM listings", [], |row| row.get(0))
        .optional()?
        .flatten();

    let last_date: Option<String> = pool
        .conn
        .query_row("SELECT MAX(date) FROM listings", [], |row| row.get(0))
        .optional()?
        .flatten();

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Listing dates:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
