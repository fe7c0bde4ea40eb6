use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,9})(?:\.([0-9]{1,2}))?$").expect("valid amount regex")
});

/// Currency amount in integer cents.
///
/// Rates and costs never go through floating point, so rounding at the
/// cent is exact and reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(into = "String")]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Parse a plain decimal amount: `5`, `5.5`, `5.50`.
    /// No sign, no currency symbol, at most two decimals.
    pub fn parse(s: &str) -> AppResult<Self> {
        let caps = AMOUNT
            .captures(s.trim())
            .ok_or_else(|| AppError::InvalidRate(s.to_string()))?;

        let units: i64 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidRate(s.to_string()))?;

        let fraction = match caps.get(2) {
            Some(m) if m.as_str().len() == 1 => m.as_str().parse::<i64>().unwrap_or(0) * 10,
            Some(m) => m.as_str().parse::<i64>().unwrap_or(0),
            None => 0,
        };

        Ok(Self(units * 100 + fraction))
    }

    /// Hourly rates must be strictly positive.
    pub fn parse_rate(s: &str) -> AppResult<Self> {
        let rate = Self::parse(s)?;
        if !rate.is_positive() {
            return Err(AppError::InvalidRate(format!(
                "{} (rate must be greater than zero)",
                s
            )));
        }
        Ok(rate)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl From<Money> for String {
    fn from(m: Money) -> Self {
        m.to_string()
    }
}
