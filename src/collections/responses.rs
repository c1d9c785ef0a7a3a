//! Response DTOs for collection endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::models::PropertyRef;

use super::gate::{CollectionAccess, GrantedCollection};

/// Flattened collection payload. The access code is never included.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse {
    pub id: String,
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_public: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub properties: Vec<PropertyRef>,
    pub total_properties: usize,
}

impl From<GrantedCollection> for CollectionResponse {
    fn from(granted: GrantedCollection) -> Self {
        let collection = granted.collection;
        Self {
            id: collection.id,
            slug: collection.slug,
            title: collection.title,
            description: collection.description,
            is_public: collection.is_public,
            expires_at: collection.expires_at,
            properties: collection.properties,
            total_properties: granted.total_properties,
        }
    }
}

impl IntoResponse for CollectionAccess {
    fn into_response(self) -> Response {
        match self {
            CollectionAccess::Granted(granted) => {
                (StatusCode::OK, Json(CollectionResponse::from(granted))).into_response()
            }
            CollectionAccess::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Collection not found" })),
            )
                .into_response(),
            CollectionAccess::Expired => (
                StatusCode::GONE,
                Json(json!({ "error": "This collection has expired", "expired": true })),
            )
                .into_response(),
            CollectionAccess::AccessCodeRequired => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Access code required", "requiresAccessCode": true })),
            )
                .into_response(),
            CollectionAccess::AccessCodeInvalid => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid access code", "requiresAccessCode": true })),
            )
                .into_response(),
        }
    }
}
