//! Request DTOs for collection endpoints.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::ShareEvent;

pub const ANONYMOUS_SHARER: &str = "anonymous";

/// Query string of `GET /collection`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionQuery {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub access_code: Option<String>,
}

impl CollectionQuery {
    pub fn slug(&self) -> Result<&str> {
        self.slug
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .ok_or_else(|| AppError::BadRequest("slug is required".to_string()))
    }
}

/// Body of `POST /collection`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    #[serde(default)]
    pub collection_id: Option<String>,
    #[serde(default)]
    pub shared_by: Option<String>,
}

impl ShareRequest {
    pub fn into_event(self, timestamp: DateTime<Utc>) -> Result<ShareEvent> {
        let collection_id = self
            .collection_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest("collectionId is required".to_string()))?;

        let shared_by = self
            .shared_by
            .map(|by| by.trim().to_string())
            .filter(|by| !by.is_empty())
            .unwrap_or_else(|| ANONYMOUS_SHARER.to_string());

        Ok(ShareEvent {
            collection_id,
            shared_by,
            timestamp,
        })
    }
}
