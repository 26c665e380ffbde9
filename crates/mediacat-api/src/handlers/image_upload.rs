use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mediacat_core::models::MediaEntry;
use mediacat_core::MediaKind;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::MediaUploadService;
use crate::state::AppState;

/// Upload images handler
///
/// Accepts up to 20 images in one multipart request under the repeated
/// "files" field and delegates to MediaUploadService for validation,
/// storage, and catalog recording.
///
/// # Returns
/// JSON array of created entries on success (HTTP 201 Created)
///
/// # Errors
/// - `AppError::InvalidInput` - Empty batch, too many files, or malformed multipart
/// - `AppError::PayloadTooLarge` - A file exceeds the per-image size limit
/// - `AppError::Storage` - Blob store write failure
/// - `AppError::Catalog` - Manifest persistence failure
#[utoipa::path(
    post,
    path = "/api/images",
    tag = "images",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Images uploaded successfully", body = Vec<MediaEntry>),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_images"))]
pub async fn upload_images(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let entries = MediaUploadService::new(&state)
        .upload_batch(MediaKind::Image, multipart)
        .await?;

    Ok((StatusCode::CREATED, Json(entries)))
}
