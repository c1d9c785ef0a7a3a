//! HTTP client for the CMS query and mutation API

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::CmsConfig;
use crate::models::{Collection, PropertyPricingProfile, ShareEvent};

use super::{queries, CmsError, ContentStore};

/// `{ "result": ... }` envelope returned by the query endpoint
#[derive(Debug, Deserialize)]
struct QueryEnvelope {
    #[serde(default)]
    result: Value,
}

/// CMS client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpCms {
    http: Client,
    api_url: String,
    dataset: String,
    token: Option<String>,
}

impl HttpCms {
    pub fn new(config: &CmsConfig) -> Result<Self, CmsError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("caribstays-web/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            dataset: config.dataset.clone(),
            token: config.token.clone(),
        })
    }

    fn query_url(&self) -> String {
        format!("{}/data/query/{}", self.api_url, self.dataset)
    }

    fn mutate_url(&self) -> String {
        format!("{}/data/mutate/{}", self.api_url, self.dataset)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Run a query with one named parameter and decode its result.
    ///
    /// A `null` result (no matching document) maps to `None`.
    async fn fetch_one<T: DeserializeOwned>(
        &self,
        query: &str,
        param: (&str, &str),
    ) -> Result<Option<T>, CmsError> {
        let (name, value) = param;
        // Query parameters are JSON-encoded, so strings arrive quoted.
        let encoded = serde_json::to_string(value)?;
        let param_key = format!("${name}");

        let request = self
            .http
            .get(self.query_url())
            .query(&[("query", query), (param_key.as_str(), encoded.as_str())]);

        let response = check_status(self.authorize(request).send().await?).await?;
        let envelope: QueryEnvelope = response.json().await?;

        decode_result(envelope.result)
    }
}

#[async_trait]
impl ContentStore for HttpCms {
    async fn pricing_profile(
        &self,
        property_id: &str,
    ) -> Result<Option<PropertyPricingProfile>, CmsError> {
        self.fetch_one(queries::PROPERTY_PRICING, ("id", property_id))
            .await
    }

    async fn collection_by_slug(&self, slug: &str) -> Result<Option<Collection>, CmsError> {
        let collection: Option<Collection> = self
            .fetch_one(queries::COLLECTION_BY_SLUG, ("slug", slug))
            .await?;
        Ok(collection.filter(|c| c.is_active))
    }

    async fn record_share(&self, event: &ShareEvent) -> Result<(), CmsError> {
        if self.token.is_none() {
            return Err(CmsError::MissingToken);
        }

        let body = share_mutation(event, &uuid::Uuid::new_v4().to_string())?;
        let request = self.http.post(self.mutate_url()).json(&body);
        check_status(self.authorize(request).send().await?).await?;

        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, CmsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CmsError::Status {
        status: status.as_u16(),
        body,
    })
}

fn decode_result<T: DeserializeOwned>(result: Value) -> Result<Option<T>, CmsError> {
    if result.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(result)?))
}

fn share_mutation(event: &ShareEvent, document_id: &str) -> Result<Value, CmsError> {
    let mut document = serde_json::to_value(event)?;
    if let Some(fields) = document.as_object_mut() {
        fields.insert("_id".to_string(), json!(document_id));
        fields.insert("_type".to_string(), json!(queries::SHARE_EVENT_TYPE));
        fields.insert(
            "collection".to_string(),
            json!({ "_type": "reference", "_ref": event.collection_id }),
        );
    }

    Ok(json!({ "mutations": [ { "create": document } ] }))
}
