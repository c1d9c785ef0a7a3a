//! Collection endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::AppState;

use super::gate::evaluate_access;
use super::requests::{CollectionQuery, ShareRequest};
use super::sharing::spawn_share_tracking;

pub fn router() -> Router<AppState> {
    Router::new().route("/collection", get(show).post(share))
}

/// Show a collection if the caller may see it
pub async fn show(
    State(state): State<AppState>,
    query: std::result::Result<Query<CollectionQuery>, QueryRejection>,
) -> Result<Response> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let slug = query.slug()?;

    let collection = state.cms.collection_by_slug(slug).await?;
    let access = evaluate_access(collection, query.access_code.as_deref(), Utc::now());

    tracing::debug!(slug = %slug, outcome = access.outcome(), "Evaluated collection access");

    Ok(access.into_response())
}

/// Record that a collection was shared. Always answers `{ ok: true }` once
/// the body is valid; tracking happens in the background.
pub async fn share(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ShareRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(body) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let event = body.into_event(Utc::now())?;

    spawn_share_tracking(state.cms.clone(), event);

    Ok(Json(json!({ "ok": true })))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::{Duration, Utc};
    use serde_json::{json, Map};

    use crate::cms::testing::MemoryCms;
    use crate::models::{Collection, PropertyRef};
    use crate::routes::test_support::{app, get, post_json, send};

    fn property(id: &str, status: &str) -> PropertyRef {
        let mut extra = Map::new();
        extra.insert("bedrooms".to_string(), json!(3));
        PropertyRef {
            id: id.to_string(),
            title: Some(format!("Villa {id}")),
            slug: Some(id.to_string()),
            status: Some(status.to_string()),
            extra,
        }
    }

    fn collection(slug: &str) -> Collection {
        Collection {
            id: format!("col-{slug}"),
            slug: slug.to_string(),
            title: Some("Hand-picked villas".to_string()),
            description: None,
            is_public: true,
            access_code: None,
            expires_at: None,
            properties: vec![
                property("p1", "active"),
                property("p2", "sold"),
                property("p3", "active"),
            ],
            is_active: true,
        }
    }

    fn cms() -> MemoryCms {
        let mut cms = MemoryCms::default();
        cms.collections
            .insert("open".to_string(), collection("open"));
        cms.collections.insert(
            "private".to_string(),
            Collection {
                is_public: false,
                access_code: Some("Palm42".to_string()),
                ..collection("private")
            },
        );
        cms.collections.insert(
            "expired".to_string(),
            Collection {
                is_public: false,
                access_code: Some("Palm42".to_string()),
                expires_at: Some(Utc::now() - Duration::days(2)),
                ..collection("expired")
            },
        );
        cms.collections.insert(
            "retired".to_string(),
            Collection {
                is_active: false,
                ..collection("retired")
            },
        );
        cms
    }

    #[tokio::test]
    async fn test_public_collection() {
        let (router, _) = app(cms());

        let (status, body) = send(router, get("/api/collection?slug=open")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slug"], "open");
        assert_eq!(body["totalProperties"], 2);
        assert_eq!(body["properties"][1]["id"], "p3");
        assert_eq!(body["properties"][0]["bedrooms"], 3);
        assert!(body.get("accessCode").is_none());
    }

    #[tokio::test]
    async fn test_missing_slug_is_400() {
        let (router, _) = app(cms());
        let (status, body) = send(router, get("/api/collection")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "slug is required" }));
    }

    #[tokio::test]
    async fn test_malformed_query_is_json_400() {
        let (router, _) = app(cms());
        let (status, body) = send(router, get("/api/collection?slug=open&slug=other")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_and_inactive_are_404() {
        for uri in ["/api/collection?slug=nope", "/api/collection?slug=retired"] {
            let (router, _) = app(cms());
            let (status, body) = send(router, get(uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, json!({ "error": "Collection not found" }));
        }
    }

    #[tokio::test]
    async fn test_expired_is_410() {
        let (router, _) = app(cms());

        let (status, body) =
            send(router, get("/api/collection?slug=expired&accessCode=wrong")).await;

        assert_eq!(status, StatusCode::GONE);
        assert_eq!(body["expired"], true);
    }

    #[tokio::test]
    async fn test_private_collection_gating() {
        let (router, _) = app(cms());
        let (status, body) = send(router, get("/api/collection?slug=private")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({ "error": "Access code required", "requiresAccessCode": true })
        );

        let (router, _) = app(cms());
        let (status, body) =
            send(router, get("/api/collection?slug=private&accessCode=palm42")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({ "error": "Invalid access code", "requiresAccessCode": true })
        );

        let (router, _) = app(cms());
        let (status, body) =
            send(router, get("/api/collection?slug=private&accessCode=Palm42")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalProperties"], 2);
        assert_eq!(body["isPublic"], false);
    }

    #[tokio::test]
    async fn test_cms_failure_is_500() {
        let (router, _) = app(MemoryCms::failing());
        let (status, _) = send(router, get("/api/collection?slug=open")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_share_tracking() {
        let (router, cms) = app(cms());

        let (status, body) = send(
            router,
            post_json(
                "/api/collection",
                &json!({ "collectionId": "col-open", "sharedBy": "agent@example.com" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));

        // tracking runs on a detached task
        for _ in 0..50 {
            if !cms.recorded_shares().is_empty() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        let shares = cms.recorded_shares();
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].collection_id, "col-open");
        assert_eq!(shares[0].shared_by, "agent@example.com");
    }

    #[tokio::test]
    async fn test_share_failure_is_swallowed() {
        let (router, _) = app(MemoryCms::failing());

        let (status, body) = send(
            router,
            post_json("/api/collection", &json!({ "collectionId": "col-open" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_share_without_collection_id_is_400() {
        let (router, cms) = app(cms());

        let (status, body) = send(
            router,
            post_json("/api/collection", &json!({ "sharedBy": "agent" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "collectionId is required" }));
        assert!(cms.recorded_shares().is_empty());
    }
}
