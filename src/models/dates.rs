//! Date parsing shared by CMS documents and request bodies.
//!
//! The CMS stores calendar fields as `YYYY-MM-DD` and timestamps as RFC 3339.
//! Both are normalized to `DateTime<Utc>`; bare dates land on 00:00 UTC.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer};

/// Parse a bare date or an RFC 3339 timestamp.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

pub fn instant<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
}

pub fn optional_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_instant(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {raw}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_bare_date_is_utc_midnight() {
        assert_eq!(
            parse_instant("2025-06-01"),
            Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_rfc3339_offset_is_normalized() {
        assert_eq!(
            parse_instant("2025-06-01T10:00:00-04:00"),
            Some(Utc.with_ymd_and_hms(2025, 6, 1, 14, 0, 0).unwrap())
        );
        assert_eq!(
            parse_instant(" 2025-06-01T10:00:00Z "),
            Some(Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(parse_instant(""), None);
        assert_eq!(parse_instant("tomorrow"), None);
        assert_eq!(parse_instant("2025-13-01"), None);
    }
}
