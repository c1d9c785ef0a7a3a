//! Shareable property collections

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::dates;

/// Status a referenced property must carry to be shown in a collection
pub const ACTIVE_STATUS: &str = "active";

/// Curated, optionally access-gated set of properties
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(rename = "_id")]
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub access_code: Option<String>,
    #[serde(default, deserialize_with = "dates::optional_instant")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "dereferenced_properties")]
    pub properties: Vec<PropertyRef>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Collection {
    /// Access code, if one is actually configured
    pub fn required_code(&self) -> Option<&str> {
        self.access_code.as_deref().filter(|code| !code.is_empty())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(expires_at) if now > expires_at)
    }
}

/// Property card referenced by a collection.
///
/// Only the fields the gate needs are typed; the rest of the card
/// (images, bedrooms, location...) passes through in `extra`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PropertyRef {
    #[serde(rename(deserialize = "_id", serialize = "id"))]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PropertyRef {
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some(ACTIVE_STATUS)
    }
}

/// Dangling references come back from the CMS as `null`; drop them here.
fn dereferenced_properties<'de, D>(deserializer: D) -> Result<Vec<PropertyRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let refs = Option::<Vec<Option<PropertyRef>>>::deserialize(deserializer)?;
    Ok(refs.unwrap_or_default().into_iter().flatten().collect())
}

/// Analytics record written when a visitor shares a collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareEvent {
    pub collection_id: String,
    pub shared_by: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_collection_from_cms_document() {
        let doc = json!({
            "_id": "col-1",
            "slug": "smith-family-2025",
            "title": "Villas for the Smiths",
            "description": null,
            "isPublic": false,
            "accessCode": "SUNNY",
            "expiresAt": "2025-09-01T00:00:00Z",
            "isActive": true,
            "properties": [
                { "_id": "p1", "title": "Casa Azul", "slug": "casa-azul", "status": "active", "bedrooms": 4 },
                null,
                { "_id": "p2", "title": "Old Mill", "status": "archived" }
            ]
        });

        let collection: Collection = serde_json::from_value(doc).unwrap();

        assert_eq!(collection.id, "col-1");
        assert_eq!(collection.required_code(), Some("SUNNY"));
        assert_eq!(
            collection.expires_at,
            Some(Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(collection.properties.len(), 2);
        assert!(collection.properties[0].is_active());
        assert_eq!(collection.properties[0].extra.get("bedrooms"), Some(&json!(4)));
        assert!(!collection.properties[1].is_active());
    }

    #[test]
    fn test_missing_optional_fields() {
        let doc = json!({
            "_id": "col-2",
            "slug": "beachfront",
            "title": "Beachfront",
            "properties": null
        });

        let collection: Collection = serde_json::from_value(doc).unwrap();

        assert!(!collection.is_public);
        assert!(collection.is_active);
        assert_eq!(collection.expires_at, None);
        assert!(collection.properties.is_empty());
    }

    #[test]
    fn test_untitled_collection_still_decodes() {
        let missing: Collection =
            serde_json::from_value(json!({ "_id": "c", "slug": "s" })).unwrap();
        assert_eq!(missing.title, None);

        let null: Collection =
            serde_json::from_value(json!({ "_id": "c", "slug": "s", "title": null })).unwrap();
        assert_eq!(null.title, None);
    }

    #[test]
    fn test_empty_access_code_is_not_required() {
        let doc = json!({ "_id": "c", "slug": "s", "title": "t", "accessCode": "" });
        let collection: Collection = serde_json::from_value(doc).unwrap();
        assert_eq!(collection.required_code(), None);
    }

    #[test]
    fn test_property_ref_serializes_id_without_underscore() {
        let property: PropertyRef =
            serde_json::from_value(json!({ "_id": "p1", "status": "active", "price": 300 }))
                .unwrap();

        let out = serde_json::to_value(&property).unwrap();

        assert_eq!(out["id"], "p1");
        assert_eq!(out["price"], 300);
        assert!(out.get("_id").is_none());
    }

    #[test]
    fn test_share_event_wire_shape() {
        let event = ShareEvent {
            collection_id: "col-1".into(),
            shared_by: "agent@example.com".into(),
            timestamp: Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap(),
        };

        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "collectionId": "col-1",
                "sharedBy": "agent@example.com",
                "timestamp": "2025-05-01T12:00:00Z"
            })
        );
    }
}
