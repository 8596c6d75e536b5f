//! Shared building blocks for the category scorers.

use chrono::{DateTime, Months, Utc};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Points for the first tier whose threshold `value` reaches, or 0.
///
/// Tiers are listed from the highest threshold down.
pub fn tier_at_least<T: PartialOrd + Copy>(value: T, tiers: &[(T, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map_or(0.0, |(_, points)| *points)
}

/// Points for the first tier whose threshold `value` stays under, or 0.
///
/// Tiers are listed from the lowest threshold up.
pub fn tier_below(value: i64, tiers: &[(i64, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| value < *threshold)
        .map_or(0.0, |(_, points)| *points)
}

/// `part / total` as a fraction, with an empty total treated as 0.
#[expect(clippy::cast_precision_loss, reason = "counts are far below 2^52")]
pub fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { part as f64 / total as f64 }
}

/// Round accumulated points to the nearest integer and cap them to the 0..=100 range.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "value is clamped to 0..=100 first")]
pub fn finish(points: f64) -> u8 {
    if points.is_nan() {
        return 0;
    }

    points.round().clamp(0.0, 100.0) as u8
}

/// Whole days elapsed between `timestamp` and `now`, rounded up.
#[must_use]
pub fn days_since(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (now - timestamp).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

/// The instant one calendar month before `now`.
#[must_use]
pub fn month_before(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(1)).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Whether a timestamp lies strictly after the cutoff. A missing timestamp is never recent.
#[must_use]
pub fn is_after(timestamp: Option<DateTime<Utc>>, cutoff: DateTime<Utc>) -> bool {
    timestamp.is_some_and(|ts| ts > cutoff)
}
