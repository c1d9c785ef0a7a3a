//! Request DTOs for the quote endpoint.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::dates::parse_instant;

use super::quote::StayRequest;

/// Body of `POST /quote`.
///
/// Every field is optional at the serde level so that a missing field
/// produces a field-level message instead of a generic rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    /// Accepted as a JSON number or a numeric string
    #[serde(default)]
    pub guests: Option<Value>,
}

impl QuoteRequest {
    pub fn validate(self) -> Result<StayRequest> {
        let property_id = required("propertyId", self.property_id)?;
        let check_in_raw = required("checkIn", self.check_in)?;
        let check_out_raw = required("checkOut", self.check_out)?;

        let check_in = parse_instant(&check_in_raw)
            .ok_or_else(|| AppError::BadRequest("checkIn must be a valid date".to_string()))?;
        let check_out = parse_instant(&check_out_raw)
            .ok_or_else(|| AppError::BadRequest("checkOut must be a valid date".to_string()))?;

        if check_out <= check_in {
            return Err(AppError::BadRequest(
                "checkOut must be after checkIn".to_string(),
            ));
        }

        let guests = match self.guests {
            None | Some(Value::Null) => {
                return Err(AppError::BadRequest("guests is required".to_string()))
            }
            Some(value) => parse_guests(&value).ok_or_else(|| {
                AppError::BadRequest("guests must be a whole number of at least 1".to_string())
            })?,
        };

        Ok(StayRequest {
            property_id,
            check_in,
            check_out,
            guests,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{field} is required")))
}

fn parse_guests(value: &Value) -> Option<u32> {
    let guests = match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    }?;
    (guests >= 1).then_some(guests)
}
