//! Application state.
//!
//! One state object holding the injected storage backend and manifest
//! catalog; handlers receive it via axum's `State` extractor and never
//! construct their own storage or catalog handles.

use std::sync::Arc;
use std::time::Instant;

use mediacat_catalog::ManifestCatalog;
use mediacat_core::Config;
use mediacat_storage::BlobStore;

/// Main application state: configuration plus the two injected collaborators.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn BlobStore>,
    pub catalog: Arc<ManifestCatalog>,
    /// Process start, for uptime reporting in health responses.
    pub started_at: Instant,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
