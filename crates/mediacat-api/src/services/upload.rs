//! Unified media upload service
//!
//! This service provides one upload pipeline shared by all media categories:
//! extract → validate → store → catalog

use std::sync::Arc;

use axum::extract::Multipart;
use chrono::Utc;
use mediacat_core::models::{MediaEntry, MediaKind};

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::{
    extract_multipart_files, unique_filename, validate_batch_count, validate_file_size, UploadPart,
};

/// Unified media upload service
///
/// Handlers bind a category and delegate here; the pipeline is identical
/// for images, videos, and PDFs apart from the per-category limits.
pub struct MediaUploadService {
    state: Arc<AppState>,
}

impl MediaUploadService {
    /// Create a new MediaUploadService
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Complete upload workflow: extract → validate → store → catalog
    ///
    /// The whole batch is read and validated before the first byte reaches
    /// storage, so a rejected request leaves no stored blobs and no catalog
    /// entries behind.
    pub async fn upload_batch(
        &self,
        kind: MediaKind,
        multipart: Multipart,
    ) -> Result<Vec<MediaEntry>, HttpAppError> {
        // 1. Extract and validate the batch
        let parts = self.extract_and_validate(kind, multipart).await?;

        // 2. Store every blob under a collision-resistant name
        let mut entries = Vec::with_capacity(parts.len());
        for part in parts {
            let stored_name = unique_filename(&part.filename);
            let blob = self
                .state
                .storage
                .store(kind, &stored_name, &part.content_type, part.data)
                .await?;

            entries.push(MediaEntry {
                filename: stored_name,
                category: kind,
                locator: blob.locator,
                url: blob.url,
                uploaded_at: Utc::now(),
            });
        }

        // 3. Record the whole batch in the catalog in one mutation
        self.state
            .catalog
            .record_uploads(kind, entries.clone())
            .await?;

        tracing::info!(
            category = %kind,
            count = entries.len(),
            "Upload batch stored and cataloged"
        );

        Ok(entries)
    }

    /// Extract and validate all files from the multipart request
    async fn extract_and_validate(
        &self,
        kind: MediaKind,
        multipart: Multipart,
    ) -> Result<Vec<UploadPart>, HttpAppError> {
        let parts = extract_multipart_files(multipart).await?;

        validate_batch_count(parts.len(), kind)?;

        let max_size = self.state.config.max_size_bytes_for(kind);
        for part in &parts {
            validate_file_size(part.data.len(), max_size)?;
        }

        Ok(parts)
    }
}
