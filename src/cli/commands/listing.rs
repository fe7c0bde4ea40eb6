use crate::cli::parser::{Commands, ListingAction};
use crate::config::Config;
use crate::core::listing::{ListingChanges, ListingLogic};
use crate::db::initialize::open_db;
use crate::db::queries::load_listings;
use crate::errors::{AppError, AppResult};
use crate::models::listing::Listing;
use crate::models::money::Money;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Listing { action } = cmd else {
        return Ok(());
    };

    let pool = open_db(&cfg.database)?;

    match action {
        ListingAction::Add {
            owner,
            address,
            date: date_str,
            from,
            to,
            rate,
        } => {
            let d = date::parse_date(date_str)
                .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;
            let rate = Money::parse_rate(rate)?;

            let listing = ListingLogic::add(&pool.conn, owner, address, d, from, to, rate)?;
            success(format!(
                "Listing #{} added: {} on {} {}-{} at {}{}/h.",
                listing.id,
                listing.address,
                listing.date_str(),
                listing.start_time,
                listing.end_time,
                cfg.currency_symbol,
                listing.rate
            ));
        }

        ListingAction::Update {
            id,
            address,
            date: date_str,
            from,
            to,
            rate,
        } => {
            let changes = ListingChanges {
                address: address.clone(),
                date: match date_str {
                    Some(s) => {
                        Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?)
                    }
                    None => None,
                },
                start: from.clone(),
                end: to.clone(),
                rate: rate.as_deref().map(Money::parse_rate).transpose()?,
            };

            let listing = ListingLogic::update(&pool.conn, *id, &changes)?;
            success(format!(
                "Listing #{} updated: {} on {} {}-{} at {}{}/h.",
                listing.id,
                listing.address,
                listing.date_str(),
                listing.start_time,
                listing.end_time,
                cfg.currency_symbol,
                listing.rate
            ));

            let stale = ListingLogic::stale_pending(&pool.conn, &listing)?;
            if !stale.is_empty() {
                let ids: Vec<String> = stale.iter().map(|b| format!("#{}", b.id)).collect();
                warning(format!(
                    "Pending booking(s) {} no longer fit this listing and will be denied on approval.",
                    ids.join(", ")
                ));
            }
        }

        ListingAction::List { date: date_str } => {
            let d = match date_str {
                Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
                None => None,
            };

            let listings = load_listings(&pool.conn, d.as_ref())?;
            if listings.is_empty() {
                info("No listings found.");
                return Ok(());
            }
            print!("{}", render_listings(&listings, cfg));
        }
    }

    Ok(())
}

pub fn render_listings(listings: &[Listing], cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("DATE", 11),
        Column::new("WINDOW", 12),
        Column::new("RATE/H", 9),
        Column::new("OWNER", 24),
        Column::new("ADDRESS", 0),
    ]);

    for l in listings {
        table.add_row(vec![
            l.id.to_string(),
            l.date_str(),
            format!("{}-{}", l.start_time, l.end_time),
            format!("{}{}", cfg.currency_symbol, l.rate),
            l.owner.clone(),
            l.address.clone(),
        ]);
    }

    table.render(&cfg.separator_char)
}
