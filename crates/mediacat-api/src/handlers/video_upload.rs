use crate::error::{ErrorResponse, HttpAppError};
use crate::services::MediaUploadService;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mediacat_core::models::MediaEntry;
use mediacat_core::MediaKind;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/videos",
    tag = "videos",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Videos uploaded successfully", body = Vec<MediaEntry>),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn upload_videos(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let entries = MediaUploadService::new(&state)
        .upload_batch(MediaKind::Video, multipart)
        .await?;

    Ok((StatusCode::CREATED, Json(entries)))
}
