//! Response DTOs for the quote endpoint.
//!
//! Monetary values go out as JSON numbers.

use rust_decimal::Decimal;
use serde::Serialize;

use super::quote::{Quote, QuoteBreakdown, Unavailability};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdownResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub accommodation_total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub nightly_rate_used: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cleaning_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub security_deposit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_rate_percent: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBody {
    pub nights: u32,
    pub currency: String,
    pub breakdown: QuoteBreakdownResponse,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_with_deposit: Decimal,
}

/// `{ available: true, quote }`
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub available: bool,
    pub quote: QuoteBody,
}

/// `{ available: false, reason, message, ...details }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnavailableResponse {
    pub available: bool,
    pub reason: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_guests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_nights: Option<u32>,
}

impl From<&QuoteBreakdown> for QuoteBreakdownResponse {
    fn from(breakdown: &QuoteBreakdown) -> Self {
        Self {
            accommodation_total: breakdown.accommodation_total,
            nightly_rate_used: breakdown.nightly_rate_used,
            cleaning_fee: breakdown.cleaning_fee,
            security_deposit: breakdown.security_deposit,
            tax_amount: breakdown.tax_amount,
            tax_rate_percent: breakdown.tax_rate_percent,
        }
    }
}

impl From<&Quote> for QuoteResponse {
    fn from(quote: &Quote) -> Self {
        Self {
            available: true,
            quote: QuoteBody {
                nights: quote.nights,
                currency: quote.currency.clone(),
                breakdown: QuoteBreakdownResponse::from(&quote.breakdown),
                subtotal: quote.subtotal,
                total: quote.total,
                total_with_deposit: quote.total_with_deposit,
            },
        }
    }
}

impl From<Unavailability> for UnavailableResponse {
    fn from(reason: Unavailability) -> Self {
        let (max_guests, minimum_nights) = match reason {
            Unavailability::ExceedsCapacity { max_guests } => (Some(max_guests), None),
            Unavailability::MinNights { minimum_nights } => (None, Some(minimum_nights)),
            Unavailability::PropertyUnavailable | Unavailability::DatesBlocked => (None, None),
        };

        Self {
            available: false,
            reason: reason.code(),
            message: reason.message(),
            max_guests,
            minimum_nights,
        }
    }
}
