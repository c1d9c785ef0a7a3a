//! Headless CMS access.
//!
//! All property and collection data lives in the CMS. Handlers talk to it
//! through [`ContentStore`] so the HTTP client can be swapped out in tests.

use async_trait::async_trait;

use crate::models::{Collection, PropertyPricingProfile, ShareEvent};

pub mod client;
pub mod queries;

pub use client::HttpCms;

/// CMS failure
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("CMS request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CMS returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected CMS payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("CMS write token is not configured")]
    MissingToken,
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Pricing configuration for a property, `None` if no such property
    async fn pricing_profile(
        &self,
        property_id: &str,
    ) -> Result<Option<PropertyPricingProfile>, CmsError>;

    /// Active collection by slug; inactive collections come back as `None`
    async fn collection_by_slug(&self, slug: &str) -> Result<Option<Collection>, CmsError>;

    /// Store a share analytics event
    async fn record_share(&self, event: &ShareEvent) -> Result<(), CmsError>;
}
