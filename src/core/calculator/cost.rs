use crate::models::money::Money;
use crate::utils::time::TimeSpan;

/// Cost of `span` at `rate_per_hour`, rounded half-up to the cent.
///
/// A zero-length or inverted span costs `0.00`; the result is never
/// negative, and a non-positive rate also yields zero.
pub fn calculate_cost(rate_per_hour: Money, span: &TimeSpan) -> Money {
    if !span.is_ordered() || !rate_per_hour.is_positive() {
        return Money::ZERO;
    }

    let minutes = i64::from(span.duration_minutes());
    // cents * minutes / 60, half-up: add half the divisor before dividing
    let scaled = rate_per_hour.cents() * minutes;
    Money::from_cents((scaled + 30) / 60)
}

/// Readable span length for quotes, e.g. `02h 30m`.
pub fn describe_duration(span: &TimeSpan) -> String {
    crate::utils::formatting::mins2readable(i64::from(span.duration_minutes()), false, false)
}
