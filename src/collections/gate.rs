//! Access decision for shareable collections.
//!
//! Evaluated fresh on every request; nothing about a previous grant is
//! remembered.

use chrono::{DateTime, Utc};

use crate::models::Collection;

/// Collection visible to the caller, with inactive properties removed
#[derive(Debug, Clone, PartialEq)]
pub struct GrantedCollection {
    pub collection: Collection,
    pub total_properties: usize,
}

/// Outcome of a collection access check
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionAccess {
    Granted(GrantedCollection),
    NotFound,
    Expired,
    AccessCodeRequired,
    AccessCodeInvalid,
}

impl CollectionAccess {
    /// Short label for logs
    pub fn outcome(&self) -> &'static str {
        match self {
            CollectionAccess::Granted(_) => "granted",
            CollectionAccess::NotFound => "not_found",
            CollectionAccess::Expired => "expired",
            CollectionAccess::AccessCodeRequired => "access_code_required",
            CollectionAccess::AccessCodeInvalid => "access_code_invalid",
        }
    }
}

/// Decide whether a collection may be shown.
///
/// Order: missing/inactive, expiry, access code. Expiry is checked first so
/// an expired private collection reports `Expired` whatever code is supplied.
/// Codes are compared exactly; an empty supplied code counts as no code.
pub fn evaluate_access(
    collection: Option<Collection>,
    supplied_code: Option<&str>,
    now: DateTime<Utc>,
) -> CollectionAccess {
    let Some(mut collection) = collection.filter(|c| c.is_active) else {
        return CollectionAccess::NotFound;
    };

    if collection.is_expired_at(now) {
        return CollectionAccess::Expired;
    }

    if !collection.is_public {
        if let Some(required) = collection.required_code() {
            match supplied_code.filter(|code| !code.is_empty()) {
                None => return CollectionAccess::AccessCodeRequired,
                Some(code) if code != required => return CollectionAccess::AccessCodeInvalid,
                Some(_) => {}
            }
        }
    }

    collection.properties.retain(|property| property.is_active());
    let total_properties = collection.properties.len();

    CollectionAccess::Granted(GrantedCollection {
        collection,
        total_properties,
    })
}
