//! Listing service shared by the per-category GET handlers.

use std::sync::Arc;

use mediacat_core::models::{MediaEntry, MediaKind};

use crate::error::HttpAppError;
use crate::state::AppState;

/// Entries for one category, newest first.
///
/// Served from the manifest catalog unless configuration routes list
/// requests to the storage backend's own index. Catalog reads fail open
/// to an empty list; a backend listing failure is a real server error
/// and surfaces as one.
pub async fn entries_for(
    state: &Arc<AppState>,
    kind: MediaKind,
) -> Result<Vec<MediaEntry>, HttpAppError> {
    if state.config.lists_from_backend() {
        let blobs = state.storage.list(kind).await?;
        let entries = blobs
            .into_iter()
            .map(|blob| {
                let filename = match blob.locator.rsplit_once('/') {
                    Some((_, name)) => name.to_string(),
                    None => blob.locator.clone(),
                };
                MediaEntry {
                    filename,
                    category: kind,
                    locator: blob.locator,
                    url: blob.url,
                    uploaded_at: blob.last_modified.unwrap_or_default(),
                }
            })
            .collect();
        return Ok(entries);
    }

    let mut entries = state.catalog.list(kind).await;
    // Manifests written by older deployments may lack resolved URLs.
    for entry in &mut entries {
        if entry.url.is_empty() {
            entry.url = state.storage.url_for(&entry.locator);
        }
    }
    Ok(entries)
}
