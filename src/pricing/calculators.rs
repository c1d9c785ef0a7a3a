//! Core pricing calculation functions.
//!
//! Pure functions for stay pricing math - no CMS access.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{Money, SeasonalRate};

pub const MILLIS_PER_DAY: i64 = 86_400_000;
pub const NIGHTS_PER_WEEK: u32 = 7;
pub const NIGHTS_PER_MONTH: u32 = 30;

/// Number of nights between check-in and check-out, rounding partial days up.
///
/// Returns 0 when check-out is not after check-in.
pub fn nights_between(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> u32 {
    let millis = (check_out - check_in).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    let nights = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    u32::try_from(nights).unwrap_or(u32::MAX)
}

/// Half-open overlap test: `[start, end)` against `[other_start, other_end)`.
pub fn ranges_overlap(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    other_start: DateTime<Utc>,
    other_end: DateTime<Utc>,
) -> bool {
    !(end <= other_start || start >= other_end)
}

/// Seasons include both their start and end instant.
pub fn season_contains(season: &SeasonalRate, at: DateTime<Utc>) -> bool {
    at >= season.start_date && at <= season.end_date
}

/// Pick the nightly rate for a stay starting at `check_in`.
///
/// The first season in list order that contains `check_in` wins, even when a
/// later season also matches.
pub fn resolve_nightly_rate<'a>(
    base: &'a Money,
    seasons: &'a [SeasonalRate],
    check_in: DateTime<Utc>,
) -> &'a Money {
    seasons
        .iter()
        .find(|season| season_contains(season, check_in))
        .map(|season| &season.nightly_rate)
        .unwrap_or(base)
}

/// Accommodation cost with length-of-stay tiering.
///
/// Monthly blocks are used for stays of 30+ nights when a monthly rate exists,
/// otherwise weekly blocks for 7+ nights when a weekly rate exists. Leftover
/// nights are charged at `nightly_rate`.
pub fn accommodation_total(
    nights: u32,
    nightly_rate: Decimal,
    weekly_rate: Option<Decimal>,
    monthly_rate: Option<Decimal>,
) -> Decimal {
    let tier = match (monthly_rate, weekly_rate) {
        (Some(monthly), _) if nights >= NIGHTS_PER_MONTH => Some((monthly, NIGHTS_PER_MONTH)),
        (_, Some(weekly)) if nights >= NIGHTS_PER_WEEK => Some((weekly, NIGHTS_PER_WEEK)),
        _ => None,
    };

    match tier {
        Some((block_rate, block_nights)) => {
            let blocks = nights / block_nights;
            let remainder = nights % block_nights;
            block_rate * Decimal::from(blocks) + nightly_rate * Decimal::from(remainder)
        }
        None => nightly_rate * Decimal::from(nights),
    }
}

/// Tax on the accommodation total. The product is kept exact, with no
/// rounding to cents.
pub fn tax_amount(accommodation_total: Decimal, tax_rate_percent: Option<Decimal>) -> Decimal {
    let rate = tax_rate_percent.unwrap_or(Decimal::ZERO);
    accommodation_total * rate / Decimal::ONE_HUNDRED
}
