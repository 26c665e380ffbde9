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

/// Upload PDF documents, up to 30 per multipart request.
#[utoipa::path(
    post,
    path = "/api/pdfs",
    tag = "pdfs",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "PDFs uploaded successfully", body = Vec<MediaEntry>),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_pdfs"))]
pub async fn upload_pdfs(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let entries = MediaUploadService::new(&state)
        .upload_batch(MediaKind::Pdf, multipart)
        .await?;

    Ok((StatusCode::CREATED, Json(entries)))
}
