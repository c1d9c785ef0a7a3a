//! Property pricing models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::dates;

/// Monetary amount as stored in the CMS
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Money {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

/// Date range with an overriding nightly rate
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalRate {
    #[serde(deserialize_with = "dates::instant")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "dates::instant")]
    pub end_date: DateTime<Utc>,
    pub nightly_rate: Money,
}

/// Calendar block (owner stay, existing booking, maintenance)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(deserialize_with = "dates::instant")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "dates::instant")]
    pub end_date: DateTime<Utc>,
}

/// Pricing configuration of a property, projected from its CMS document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPricingProfile {
    pub max_guests: u32,
    #[serde(default = "default_minimum_nights")]
    pub minimum_nights: u32,
    pub nightly_rate: Money,
    #[serde(default)]
    pub weekly_rate: Option<Money>,
    #[serde(default)]
    pub monthly_rate: Option<Money>,
    #[serde(default)]
    pub cleaning_fee: Option<Money>,
    #[serde(default)]
    pub security_deposit: Option<Money>,
    #[serde(default)]
    pub tax_rate_percent: Option<Decimal>,
    #[serde(default)]
    pub seasonal_rates: Vec<SeasonalRate>,
    #[serde(default)]
    pub blocked_date_ranges: Vec<DateRange>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_minimum_nights() -> u32 {
    1
}

fn default_true() -> bool {
    true
}
