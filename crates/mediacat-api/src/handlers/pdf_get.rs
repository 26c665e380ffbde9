use crate::error::{ErrorResponse, HttpAppError};
use crate::services::listing;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use mediacat_core::models::MediaEntry;
use mediacat_core::MediaKind;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/pdfs",
    tag = "pdfs",
    responses(
        (status = 200, description = "List of PDFs, newest first", body = Vec<MediaEntry>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_pdfs(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let entries = listing::entries_for(&state, MediaKind::Pdf).await?;
    Ok(Json(entries))
}
