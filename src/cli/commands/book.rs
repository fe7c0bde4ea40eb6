use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::{BookingLogic, BookingRequest, RequestOutcome};
use crate::core::notify::compose_request_notice;
use crate::db::initialize::open_db;
use crate::db::queries::load_listing;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Book {
        listing,
        from,
        to,
        requester,
        via,
    } = cmd
    {
        let requester = requester
            .clone()
            .or_else(|| cfg.default_requester.clone())
            .ok_or_else(|| {
                AppError::Config(
                    "No requester: pass --requester or set default_requester in the config".into(),
                )
            })?;

        let pool = open_db(&cfg.database)?;

        let req = BookingRequest {
            listing_id: *listing,
            start: from.clone(),
            end: to.clone(),
            requester,
            source: *via,
        };

        let booking = match BookingLogic::request(&pool.conn, &req)? {
            RequestOutcome::Accepted(b) => b,
            RequestOutcome::Rejected(reason) => return Err(AppError::Rejected(reason)),
        };

        success(format!(
            "Booking #{} requested: listing {} on {} {} for {}{} (pending owner approval).",
            booking.id,
            booking.listing_id,
            booking.date_str(),
            booking.span,
            cfg.currency_symbol,
            booking.cost
        ));

        if cfg.show_notifications {
            let listing = load_listing(&pool.conn, booking.listing_id)?;
            header("Owner notification");
            println!("{}", compose_request_notice(&listing, &booking, &cfg.currency_symbol));
        }
    }

    Ok(())
}
