//! Best-effort share analytics.
//!
//! Failures are logged and dropped; they never reach the visitor and are
//! not retried.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cms::ContentStore;
use crate::models::ShareEvent;

pub async fn track_share(store: &dyn ContentStore, event: ShareEvent) {
    match store.record_share(&event).await {
        Ok(()) => debug!(
            collection_id = %event.collection_id,
            shared_by = %event.shared_by,
            "Recorded collection share"
        ),
        Err(e) => warn!(
            collection_id = %event.collection_id,
            error = %e,
            "Failed to record collection share"
        ),
    }
}

/// Record a share without waiting for the CMS.
pub fn spawn_share_tracking(store: Arc<dyn ContentStore>, event: ShareEvent) -> JoinHandle<()> {
    tokio::spawn(async move { track_share(store.as_ref(), event).await })
}
