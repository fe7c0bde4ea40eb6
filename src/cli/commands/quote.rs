use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::{BookingLogic, QuoteOutcome};
use crate::core::calculator::cost::describe_duration;
use crate::db::initialize::open_db;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Live cost display: validate and price, nothing is stored.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Quote { listing, from, to } = cmd {
        let pool = open_db(&cfg.database)?;

        match BookingLogic::quote(&pool.conn, *listing, from, to)? {
            QuoteOutcome::Accepted(q) => {
                success(format!(
                    "{} on {}: {} ({}) = {}{}",
                    q.listing.address,
                    q.listing.date_str(),
                    q.span,
                    describe_duration(&q.span),
                    cfg.currency_symbol,
                    q.cost
                ));
            }
            QuoteOutcome::Rejected(reason) => return Err(AppError::Rejected(reason)),
        }
    }

    Ok(())
}
