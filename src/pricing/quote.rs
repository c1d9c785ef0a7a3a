//! Stay quote engine.
//!
//! Decides whether a property can be booked for a stay and, if so, prices it.
//! Checks run in a fixed order and the first failure is reported:
//! availability, capacity, minimum stay, calendar blocks.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::PropertyPricingProfile;

use super::calculators::{
    accommodation_total, nights_between, ranges_overlap, resolve_nightly_rate, tax_amount,
};

/// Validated stay request
#[derive(Debug, Clone, PartialEq)]
pub struct StayRequest {
    pub property_id: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: u32,
}

/// Why a stay cannot be quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailability {
    PropertyUnavailable,
    ExceedsCapacity { max_guests: u32 },
    MinNights { minimum_nights: u32 },
    DatesBlocked,
}

impl Unavailability {
    pub fn code(&self) -> &'static str {
        match self {
            Unavailability::PropertyUnavailable => "PROPERTY_UNAVAILABLE",
            Unavailability::ExceedsCapacity { .. } => "EXCEEDS_CAPACITY",
            Unavailability::MinNights { .. } => "MIN_NIGHTS",
            Unavailability::DatesBlocked => "DATES_BLOCKED",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Unavailability::PropertyUnavailable => {
                "This property is not currently available for booking".to_string()
            }
            Unavailability::ExceedsCapacity { max_guests } => {
                format!("This property accommodates a maximum of {max_guests} guests")
            }
            Unavailability::MinNights { minimum_nights } => {
                format!("This property requires a minimum stay of {minimum_nights} nights")
            }
            Unavailability::DatesBlocked => {
                "The selected dates are not available".to_string()
            }
        }
    }
}

/// Itemized price components
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteBreakdown {
    pub accommodation_total: Decimal,
    pub nightly_rate_used: Decimal,
    pub cleaning_fee: Decimal,
    pub security_deposit: Decimal,
    pub tax_amount: Decimal,
    pub tax_rate_percent: Decimal,
}

/// Priced stay
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub nights: u32,
    pub currency: String,
    pub breakdown: QuoteBreakdown,
    pub subtotal: Decimal,
    pub total: Decimal,
    pub total_with_deposit: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuoteResult {
    Available(Quote),
    Unavailable(Unavailability),
}

impl QuoteResult {
    pub fn is_available(&self) -> bool {
        matches!(self, QuoteResult::Available(_))
    }
}

/// Check availability and price a stay.
///
/// `request.check_out` is expected to be after `request.check_in`; callers
/// reject anything else before getting here.
pub fn compute_quote(profile: &PropertyPricingProfile, request: &StayRequest) -> QuoteResult {
    if !profile.is_available {
        return QuoteResult::Unavailable(Unavailability::PropertyUnavailable);
    }

    if request.guests > profile.max_guests {
        return QuoteResult::Unavailable(Unavailability::ExceedsCapacity {
            max_guests: profile.max_guests,
        });
    }

    let nights = nights_between(request.check_in, request.check_out);
    if nights < profile.minimum_nights {
        return QuoteResult::Unavailable(Unavailability::MinNights {
            minimum_nights: profile.minimum_nights,
        });
    }

    let blocked = profile.blocked_date_ranges.iter().any(|range| {
        ranges_overlap(
            request.check_in,
            request.check_out,
            range.start_date,
            range.end_date,
        )
    });
    if blocked {
        return QuoteResult::Unavailable(Unavailability::DatesBlocked);
    }

    QuoteResult::Available(price_stay(profile, request.check_in, nights))
}

fn price_stay(profile: &PropertyPricingProfile, check_in: DateTime<Utc>, nights: u32) -> Quote {
    let nightly_rate =
        resolve_nightly_rate(&profile.nightly_rate, &profile.seasonal_rates, check_in).amount;

    let accommodation = accommodation_total(
        nights,
        nightly_rate,
        profile.weekly_rate.as_ref().map(|rate| rate.amount),
        profile.monthly_rate.as_ref().map(|rate| rate.amount),
    );

    let cleaning_fee = profile
        .cleaning_fee
        .as_ref()
        .map_or(Decimal::ZERO, |fee| fee.amount);
    let security_deposit = profile
        .security_deposit
        .as_ref()
        .map_or(Decimal::ZERO, |deposit| deposit.amount);
    let tax_rate_percent = profile.tax_rate_percent.unwrap_or(Decimal::ZERO);
    let tax = tax_amount(accommodation, profile.tax_rate_percent);

    let subtotal = accommodation + cleaning_fee;
    let total = subtotal + tax;

    Quote {
        nights,
        currency: profile.nightly_rate.currency.clone(),
        breakdown: QuoteBreakdown {
            accommodation_total: accommodation,
            nightly_rate_used: nightly_rate,
            cleaning_fee,
            security_deposit,
            tax_amount: tax,
            tax_rate_percent,
        },
        subtotal,
        total,
        total_with_deposit: total + security_deposit,
    }
}
