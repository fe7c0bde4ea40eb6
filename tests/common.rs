#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use parkpulse::core::listing::ListingLogic;
use parkpulse::db::initialize::init_db;
use parkpulse::db::pool::DbPool;
use parkpulse::models::listing::Listing;
use parkpulse::models::money::Money;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ppk() -> Command {
    cargo_bin_cmd!("parkpulse")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_parkpulse.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Init DB through the CLI and add one listing:
/// 12 Elm Street, 2026-11-02, 09:00-17:00, 5.00/h (id 1).
pub fn init_db_with_listing(db_path: &str) {
    ppk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ppk()
        .args([
            "--db",
            db_path,
            "listing",
            "add",
            "--owner",
            "owner@example.com",
            "--address",
            "12 Elm Street",
            "--date",
            "2026-11-02",
            "--from",
            "09:00",
            "--to",
            "17:00",
            "--rate",
            "5.00",
        ])
        .assert()
        .success();
}

/// Fresh in-memory database with the current schema.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Listing on 2026-11-02 with the given window and rate.
pub fn add_listing(pool: &DbPool, from: &str, to: &str, rate: &str) -> Listing {
    ListingLogic::add(
        &pool.conn,
        "owner@example.com",
        "12 Elm Street",
        day("2026-11-02"),
        from,
        to,
        Money::parse_rate(rate).expect("valid rate"),
    )
    .expect("add listing")
}
