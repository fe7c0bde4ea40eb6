use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::queries::load_bookings;
use crate::errors::{AppError, AppResult};
use crate::models::booking_status::BookingStatus;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, RED, RESET, YELLOW};
use crate::utils::table::{Column, Table};

fn colorize_status(status: BookingStatus) -> String {
    let color = match status {
        BookingStatus::Pending => YELLOW,
        BookingStatus::Confirmed => GREEN,
        BookingStatus::Denied => RED,
    };
    format!("{color}{status}{RESET}")
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bookings {
        listing,
        status,
        json,
    } = cmd
    {
        let status = match status {
            Some(s) => Some(
                BookingStatus::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.clone()))?,
            ),
            None => None,
        };

        let pool = open_db(&cfg.database)?;
        let bookings = load_bookings(&pool.conn, *listing, status)?;

        if *json {
            let out = serde_json::to_string_pretty(&bookings)?;
            println!("{}", out);
            return Ok(());
        }

        if bookings.is_empty() {
            info("No bookings found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("LISTING", 8),
            Column::new("DATE", 11),
            Column::new("SPAN", 14),
            Column::new("COST", 10),
            Column::new("STATUS", 18),
            Column::new("VIA", 12),
            Column::new("REQUESTER", 0),
        ]);

        for b in &bookings {
            table.add_row(vec![
                b.id.to_string(),
                b.listing_id.to_string(),
                b.date_str(),
                format!("{}-{}", b.span.start, b.span.end),
                format!("{}{}", cfg.currency_symbol, b.cost),
                colorize_status(b.status),
                b.source.to_db_str().to_string(),
                b.requester.clone(),
            ]);
        }

        print!("{}", table.render(&cfg.separator_char));
    }

    Ok(())
}
