use crate::models::booking_source::BookingSource;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ParkPulse
/// Driveway parking marketplace backed by SQLite
#[derive(Parser)]
#[command(
    name = "parkpulse",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rent out driveways by the hour: listings, quotes, booking requests and owner approvals",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "limit", default_value_t = 50, help = "Maximum rows to print")]
        limit: usize,
    },

    /// Manage driveway listings
    Listing {
        #[command(subcommand)]
        action: ListingAction,
    },

    /// Validate a time span against a listing and show the cost
    Quote {
        /// Listing id
        listing: i64,

        #[arg(long = "from", help = "Start time (HH:MM)")]
        from: String,

        #[arg(long = "to", help = "End time (HH:MM)")]
        to: String,
    },

    /// Request a booking (stored as pending until the owner approves)
    Book {
        /// Listing id
        listing: i64,

        #[arg(long = "from", help = "Start time (HH:MM)")]
        from: String,

        #[arg(long = "to", help = "End time (HH:MM)")]
        to: String,

        #[arg(long = "requester", help = "Renter identity (email)")]
        requester: Option<String>,

        #[arg(long = "via", value_enum, default_value = "marketplace")]
        via: BookingSource,
    },

    /// Approve a pending booking (owner side)
    Approve {
        /// Booking id
        booking: i64,
    },

    /// Deny a pending booking (owner side)
    Deny {
        /// Booking id
        booking: i64,
    },

    /// List bookings
    Bookings {
        #[arg(long = "listing", help = "Only bookings for this listing")]
        listing: Option<i64>,

        #[arg(long = "status", help = "pending, confirmed or denied")]
        status: Option<String>,

        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Ask the search assistant for parking
    Search {
        /// Free-text question, e.g. "parking near Elm Street"
        query: String,

        #[arg(long = "date", help = "Only consider listings on this date (YYYY-MM-DD)")]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ListingAction {
    /// Advertise a driveway for one date and time window
    Add {
        #[arg(long = "owner", help = "Owner identity (email)")]
        owner: String,

        #[arg(long = "address")]
        address: String,

        #[arg(long = "date", help = "Date (YYYY-MM-DD)")]
        date: String,

        #[arg(long = "from", help = "Available from (HH:MM)")]
        from: String,

        #[arg(long = "to", help = "Available until (HH:MM)")]
        to: String,

        #[arg(long = "rate", help = "Hourly rate, e.g. 5.00")]
        rate: String,
    },

    /// Change an existing listing
    Update {
        /// Listing id
        id: i64,

        #[arg(long = "address")]
        address: Option<String>,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "from")]
        from: Option<String>,

        #[arg(long = "to")]
        to: Option<String>,

        #[arg(long = "rate")]
        rate: Option<String>,
    },

    /// Show listings
    List {
        #[arg(long = "date", help = "Only listings on this date (YYYY-MM-DD)")]
        date: Option<String>,
    },
}
