use crate::cli::commands::listing::render_listings;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assistant::{Assistant, InventoryMatcher};
use crate::db::initialize::open_db;
use crate::db::queries::load_listings;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { query, date: date_str } = cmd {
        let d = match date_str {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let pool = open_db(&cfg.database)?;
        let inventory = load_listings(&pool.conn, d.as_ref())?;

        let generator = InventoryMatcher::new(&inventory);
        let answer = Assistant::new(&generator).search(query, &inventory);

        if answer.degraded {
            warning(&answer.reply);
        } else {
            info(&answer.reply);
        }

        if !answer.listings.is_empty() {
            println!();
            print!("{}", render_listings(&answer.listings, cfg));
        }
    }

    Ok(())
}
