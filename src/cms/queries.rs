//! CMS query texts.
//!
//! Projections shape documents into the models in `crate::models`; array
//! fields are coalesced so the models never see `null` where they expect a list.

/// Pricing profile of one property. Parameter: `$id`.
pub const PROPERTY_PRICING: &str = r#"
*[_type == "property" && _id == $id][0]{
    "maxGuests": coalesce(maxGuests, 1),
    "minimumNights": coalesce(minimumNights, 1),
    "nightlyRate": nightlyRate{ amount, "currency": coalesce(currency, "USD") },
    "weeklyRate": weeklyRate{ amount, "currency": coalesce(currency, "USD") },
    "monthlyRate": monthlyRate{ amount, "currency": coalesce(currency, "USD") },
    "cleaningFee": cleaningFee{ amount, "currency": coalesce(currency, "USD") },
    "securityDeposit": securityDeposit{ amount, "currency": coalesce(currency, "USD") },
    taxRatePercent,
    "seasonalRates": coalesce(seasonalRates[]{
        startDate,
        endDate,
        "nightlyRate": nightlyRate{ amount, "currency": coalesce(currency, "USD") }
    }, []),
    "blockedDateRanges": coalesce(blockedDates[]{ startDate, endDate }, []),
    "isAvailable": coalesce(isAvailable, true)
}
"#;

/// Collection by slug with dereferenced property cards. Parameter: `$slug`.
///
/// Only documents explicitly marked `isActive: false` are skipped.
pub const COLLECTION_BY_SLUG: &str = r#"
*[_type == "collection" && slug.current == $slug && isActive != false][0]{
    _id,
    "slug": slug.current,
    title,
    description,
    "isPublic": coalesce(isPublic, false),
    accessCode,
    expiresAt,
    "isActive": coalesce(isActive, true),
    "properties": coalesce(properties[]->{
        _id,
        title,
        "slug": slug.current,
        status,
        location,
        bedrooms,
        bathrooms,
        maxGuests,
        "nightlyRate": nightlyRate.amount,
        "currency": coalesce(nightlyRate.currency, "USD"),
        "mainImage": mainImage.asset->url
    }, [])
}
"#;

/// Document type used for share analytics events
pub const SHARE_EVENT_TYPE: &str = "collectionShare";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Collection;
    use serde_json::json;

    #[test]
    fn test_collection_filter_keeps_unflagged_documents() {
        // a missing isActive must pass the filter and project as active
        assert!(COLLECTION_BY_SLUG.contains("isActive != false"));
        assert!(!COLLECTION_BY_SLUG.contains("isActive == true"));
        assert!(COLLECTION_BY_SLUG.contains(r#""isActive": coalesce(isActive, true)"#));

        let projected: Collection =
            serde_json::from_value(json!({ "_id": "c", "slug": "x", "title": "X" })).unwrap();
        assert!(projected.is_active);
    }
}
