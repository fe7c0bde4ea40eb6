//! ParkPulse main entrypoint.

use parkpulse::run;
use parkpulse::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
