//! Storage and catalog setup

use anyhow::Result;
use mediacat_catalog::ManifestCatalog;
use mediacat_core::Config;
use mediacat_storage::{create_storage, BlobStore};
use std::sync::Arc;

/// Setup the blob store backend selected by configuration.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn BlobStore>> {
    tracing::info!("Initializing storage abstraction...");
    let storage = create_storage(config).await?;
    tracing::info!(
        backend = ?storage.backend_type(),
        "Storage abstraction initialized successfully"
    );
    Ok(storage)
}

/// Setup the manifest catalog at the configured path.
pub fn setup_catalog(config: &Config) -> Arc<ManifestCatalog> {
    let catalog = Arc::new(ManifestCatalog::new(&config.manifest_path));
    tracing::info!(
        manifest_path = %catalog.path().display(),
        "Manifest catalog initialized"
    );
    catalog
}
