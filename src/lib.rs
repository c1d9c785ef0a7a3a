//! Caribstays website backend.
//!
//! Serves the stay quote calculator and shareable property collections on
//! top of content held in a headless CMS.

use std::sync::Arc;

pub mod cms;
pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod routes;

pub use routes::build_router;

use cms::ContentStore;
use config::AppConfig;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub cms: Arc<dyn ContentStore>,
}

impl AppState {
    pub fn new(config: AppConfig, cms: Arc<dyn ContentStore>) -> Self {
        Self {
            config: Arc::new(config),
            cms,
        }
    }
}
