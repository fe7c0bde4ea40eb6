use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_listing, ppk, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    ppk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // second run: nothing left to migrate
    ppk()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("0 applied"));
}

#[test]
fn test_listing_add_and_list() {
    let db_path = setup_test_db("cli_listing_list");
    init_db_with_listing(&db_path);

    ppk()
        .args(["--db", &db_path, "listing", "list"])
        .assert()
        .success()
        .stdout(contains("12 Elm Street"))
        .stdout(contains("09:00-17:00"))
        .stdout(contains("$5.00"));

    ppk()
        .args(["--db", &db_path, "listing", "list", "--date", "2026-11-03"])
        .assert()
        .success()
        .stdout(contains("No listings found"));
}

#[test]
fn test_listing_add_rejects_inverted_window() {
    let db_path = setup_test_db("cli_listing_bad_window");
    init_db_with_listing(&db_path);

    ppk()
        .args([
            "--db",
            &db_path,
            "listing",
            "add",
            "--owner",
            "o@example.com",
            "--address",
            "1 Oak Road",
            "--date",
            "2026-11-02",
            "--from",
            "17:00",
            "--to",
            "09:00",
            "--rate",
            "4",
        ])
        .assert()
        .failure()
        .stderr(contains("end time must be later"));
}

#[test]
fn test_listing_add_rejects_bad_rate() {
    let db_path = setup_test_db("cli_listing_bad_rate");
    init_db_with_listing(&db_path);

    ppk()
        .args([
            "--db",
            &db_path,
            "listing",
            "add",
            "--owner",
            "o@example.com",
            "--address",
            "1 Oak Road",
            "--date",
            "2026-11-02",
            "--from",
            "09:00",
            "--to",
            "12:00",
            "--rate",
            "0",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid hourly rate"));
}

#[test]
fn test_quote_shows_cost() {
    let db_path = setup_test_db("cli_quote");
    init_db_with_listing(&db_path);

    ppk()
        .args(["--db", &db_path, "quote", "1", "--from", "09:00", "--to", "09:30"])
        .assert()
        .success()
        .stdout(contains("$2.50"))
        .stdout(contains("00h 30m"));
}

#[test]
fn test_quote_outside_window_fails() {
    let db_path = setup_test_db("cli_quote_outside");
    init_db_with_listing(&db_path);

    ppk()
        .args(["--db", &db_path, "quote", "1", "--from", "08:00", "--to", "10:00"])
        .assert()
        .failure()
        .stderr(contains("outside the hours"));
}

#[test]
fn test_book_then_approve() {
    let db_path = setup_test_db("cli_book_approve");
    init_db_with_listing(&db_path);

    ppk()
        .args([
            "--db",
            &db_path,
            "book",
            "1",
            "--from",
            "10:00",
            "--to",
            "12:00",
            "--requester",
            "ann@example.com",
            "--via",
            "chat",
        ])
        .assert()
        .success()
        .stdout(contains("Booking #1 requested"))
        .stdout(contains("$10.00"))
        .stdout(contains("To: owner@example.com"));

    ppk()
        .args(["--db", &db_path, "bookings", "--status", "pending"])
        .assert()
        .success()
        .stdout(contains("ann@example.com"))
        .stdout(contains("chat"));

    ppk()
        .args(["--db", &db_path, "approve", "1"])
        .assert()
        .success()
        .stdout(contains("Booking #1 confirmed"))
        .stdout(contains("To: ann@example.com"));

    ppk()
        .args(["--db", &db_path, "bookings", "--json"])
        .assert()
        .success()
        .stdout(contains("\"status\": \"confirmed\""))
        .stdout(contains("\"cost\": \"10.00\""));
}

#[test]
fn test_book_rejected_is_not_stored() {
    let db_path = setup_test_db("cli_book_rejected");
    init_db_with_listing(&db_path);

    ppk()
        .args([
            "--db",
            &db_path,
            "book",
            "1",
            "--from",
            "10:00",
            "--to",
            "10:00",
            "--requester",
            "ann@example.com",
        ])
        .assert()
        .failure()
        .stderr(contains("end time must be later"));

    ppk()
        .args(["--db", &db_path, "book", "1", "--from", "9am", "--to", "11:00", "--requester", "x@example.com"])
        .assert()
        .failure()
        .stderr(contains("HH:MM"));

    ppk()
        .args(["--db", &db_path, "bookings"])
        .assert()
        .success()
        .stdout(contains("No bookings found"));
}

#[test]
fn test_conflicting_approval_fails() {
    let db_path = setup_test_db("cli_conflict");
    init_db_with_listing(&db_path);

    for (from, to, who) in [
        ("10:00", "12:00", "ann@example.com"),
        ("11:30", "13:00", "bob@example.com"),
    ] {
        ppk()
            .args([
                "--db", &db_path, "book", "1", "--from", from, "--to", to, "--requester", who,
            ])
            .assert()
            .success();
    }

    ppk()
        .args(["--db", &db_path, "approve", "1"])
        .assert()
        .success();

    ppk()
        .args(["--db", &db_path, "approve", "2"])
        .assert()
        .failure()
        .stderr(contains("conflicts with confirmed booking(s) [1]"));

    ppk()
        .args(["--db", &db_path, "deny", "2"])
        .assert()
        .success()
        .stdout(contains("Booking #2 denied"));

    ppk()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("booking_conflict"))
        .stdout(contains("booking_denied"));
}

#[test]
fn test_listing_update_warns_about_stale_requests() {
    let db_path = setup_test_db("cli_listing_update");
    init_db_with_listing(&db_path);

    ppk()
        .args([
            "--db", &db_path, "book", "1", "--from", "15:00", "--to", "17:00", "--requester",
            "ann@example.com",
        ])
        .assert()
        .success();

    ppk()
        .args(["--db", &db_path, "listing", "update", "1", "--to", "14:00"])
        .assert()
        .success()
        .stdout(contains("Listing #1 updated"))
        .stdout(contains("#1 no longer fit"));

    ppk()
        .args(["--db", &db_path, "approve", "1"])
        .assert()
        .success()
        .stdout(contains("was denied"));

    ppk()
        .args(["--db", &db_path, "bookings", "--status", "denied"])
        .assert()
        .success()
        .stdout(contains("ann@example.com"));
}

#[test]
fn test_search_finds_listing() {
    let db_path = setup_test_db("cli_search");
    init_db_with_listing(&db_path);

    ppk()
        .args(["--db", &db_path, "search", "parking on elm street"])
        .assert()
        .success()
        .stdout(contains("12 Elm Street"));

    ppk()
        .args(["--db", &db_path, "search", "any street parking by the stadium?"])
        .assert()
        .success()
        .stdout(contains("Public garages"))
        .stdout(contains("12 Elm Street").not());
}

#[test]
fn test_db_info() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_listing(&db_path);

    ppk()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Listings:"))
        .stdout(contains("Integrity check passed"));
}
