use clap::ValueEnum;
use serde::Serialize;

/// Surface a booking request came from. All of them go through the same
/// validator; the source is kept for the audit trail only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BookingSource {
    Chat,        // conversational assistant
    Marketplace, // listing card
}

impl BookingSource {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            BookingSource::Chat => "chat",
            BookingSource::Marketplace => "marketplace",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "chat" => Some(BookingSource::Chat),
            "marketplace" => Some(BookingSource::Marketplace),
            _ => None,
        }
    }
}
