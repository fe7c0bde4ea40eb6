use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::approval::{ApprovalLogic, ApprovalOutcome};
use crate::core::notify::compose_confirmation_notice;
use crate::db::initialize::open_db;
use crate::db::queries::load_listing;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};

/// `approve` and `deny`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Approve { booking } => {
            let mut pool = open_db(&cfg.database)?;

            match ApprovalLogic::approve(&mut pool, *booking)? {
                ApprovalOutcome::Confirmed(b) => {
                    success(format!(
                        "Booking #{} confirmed: {} on {} for {}{}.",
                        b.id,
                        b.span,
                        b.date_str(),
                        cfg.currency_symbol,
                        b.cost
                    ));

                    if cfg.show_notifications {
                        let listing = load_listing(&pool.conn, b.listing_id)?;
                        header("Renter notification");
                        println!(
                            "{}",
                            compose_confirmation_notice(&listing, &b, &cfg.currency_symbol)
                        );
                    }
                }
                ApprovalOutcome::Invalidated(b, reason) => {
                    warning(format!(
                        "Booking #{} was denied: the listing changed since the request. {}",
                        b.id, reason
                    ));
                }
            }
        }

        Commands::Deny { booking } => {
            let pool = open_db(&cfg.database)?;
            let b = ApprovalLogic::deny(&pool.conn, *booking)?;
            success(format!("Booking #{} denied.", b.id));
        }

        _ => {}
    }

    Ok(())
}
